use crate::error::UncResult;
use crate::identity::IdentityInput;
use crate::sink::{NoopSink, StageSink, WriterSink};
use crate::stage::Stage;
use std::fmt;

/// Number of hex characters the checksum adds to the plain name.
pub const SUFFIX_LEN: usize = 8;

/// `firstName + lastName + hex(crc32)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedUsername(String);

impl DerivedUsername {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The plain name part
    pub fn prefix(&self) -> &str {
        &self.0[..self.0.len() - SUFFIX_LEN]
    }

    /// The checksum part
    pub fn suffix(&self) -> &str {
        &self.0[self.0.len() - SUFFIX_LEN..]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DerivedUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Runs the hash chain over a validated identity.
///
/// Each stage is fed the raw digest bytes of the previous one (not its hex
/// text). The sink sees every stage before the username is assembled.
pub fn derive(input: &IdentityInput, sink: &mut dyn StageSink) -> DerivedUsername {
    let mut data = input.preimage().into_bytes();
    let mut checksum = String::new();

    for stage in Stage::ALL {
        let result = stage.compute(&data);
        tracing::debug!(stage = %stage, len = result.bytes().len(), "stage computed");
        sink.record(&result);

        checksum = result.hex().to_string();
        data = result.bytes().to_vec();
    }

    DerivedUsername(input.plain_name() + &checksum)
}

/// Validates the identity fields and derives the username.
///
/// With `verbose` set, the stage outputs are printed to stdout, labelled and
/// in order, before this returns.
pub fn derive_username(
    first_name: &str,
    last_name: &str,
    date_of_birth: &str,
    salt: &str,
    verbose: bool,
) -> UncResult<String> {
    let input = IdentityInput::new(first_name, last_name, date_of_birth, Some(salt))?;

    let username = if verbose {
        let mut sink = WriterSink::new(std::io::stdout().lock());
        derive(&input, &mut sink)
    } else {
        derive(&input, &mut NoopSink)
    };

    Ok(username.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UncError;
    use crate::stage::StageResult;

    fn jane(salt: Option<&str>) -> IdentityInput {
        IdentityInput::new("Jane", "Doe", "1990-01-01", salt).unwrap()
    }

    #[test]
    fn t_reference_username() {
        let u = derive(&jane(None), &mut NoopSink);
        assert_eq!(u.as_str(), "JaneDoe3f4fb56f");
        assert_eq!(u.prefix(), "JaneDoe");
        assert_eq!(u.suffix(), "3f4fb56f");
    }

    #[test]
    fn t_stages_chain_on_raw_bytes() {
        let mut stages: Vec<StageResult> = Vec::new();
        derive(&jane(None), &mut stages);

        let labels: Vec<_> = stages.iter().map(|r| r.stage()).collect();
        assert_eq!(labels, Stage::ALL);
        assert_eq!(
            stages[0].hex(),
            "0cafb75425d8f68900ed543c53afee32bb579b7150559480879f9f06195f1a52"
        );
        assert_eq!(stages[1].hex(), "93432f0e1127da45dba5bb23ce2ee875aa3f6cc3");
        assert_eq!(stages[2].hex(), "3f4fb56f");

        assert_eq!(&Stage::Ripemd160.compute(stages[0].bytes()), &stages[1]);
        assert_eq!(&Stage::Crc32.compute(stages[1].bytes()), &stages[2]);
    }

    #[test]
    fn t_salt_changes_suffix() {
        let plain = derive(&jane(None), &mut NoopSink);
        let salted = derive(&jane(Some("pepper")), &mut NoopSink);
        assert_eq!(salted.as_str(), "JaneDoe0edc8c32");
        assert_ne!(plain, salted);
    }

    #[test]
    fn t_empty_salt_same_as_none() {
        assert_eq!(
            derive(&jane(None), &mut NoopSink),
            derive(&jane(Some("")), &mut NoopSink)
        );
    }

    #[test]
    fn t_sink_does_not_change_result() {
        let mut stages: Vec<StageResult> = Vec::new();
        let with_sink = derive(&jane(Some("s")), &mut stages);
        let without = derive(&jane(Some("s")), &mut NoopSink);
        assert_eq!(with_sink, without);
    }

    #[test]
    fn t_derive_username_contract() {
        assert_eq!(
            derive_username("John", "Doe", "1990-01-01", "", false).unwrap(),
            "JohnDoe9b64b28f"
        );
        assert_eq!(
            derive_username("Jane", "Doe", "", "salt", false).unwrap_err(),
            UncError::InvalidInput { field: "date of birth" }
        );
    }

    #[test]
    fn t_non_ascii_names() {
        let id = IdentityInput::new("Zoë", "Ångström", "2001-12-31", None).unwrap();
        let u = derive(&id, &mut NoopSink);
        assert_eq!(u.as_str(), "ZoëÅngströmb59a1505");
        assert_eq!(u.prefix(), "ZoëÅngström");
    }
}
