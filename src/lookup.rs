use std::fmt;

use crate::{
    error::{Error, Result},
    hex, OpcodeRecord,
};

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Case-insensitive substring of the mnemonic.
    Name(String),
    Hex(u8),
}

impl Query {
    /// Surrounding whitespace is ignored.
    pub fn from_hex(s: &str) -> Result<Self> {
        let byte = hex::decode_u8(s.trim()).map_err(|source| Error::InvalidHex {
            input: s.to_string(),
            source,
        })?;
        Ok(Query::Hex(byte))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Name(name) => write!(f, "{name:?}"),
            Query::Hex(byte) => write!(f, "0x{}", hex::encode_u8(*byte)),
        }
    }
}

/// An empty result means no match; it is not an error here.
pub fn lookup<'a>(records: &'a [OpcodeRecord], query: &Query) -> Vec<&'a OpcodeRecord> {
    match query {
        Query::Name(name) => by_name(records, name),
        Query::Hex(byte) => by_hex(records, *byte).into_iter().collect(),
    }
}

/// Every record whose name contains `name`, ignoring case. Exact matches come
/// first, then the rest in table order.
pub fn by_name<'a>(records: &'a [OpcodeRecord], name: &str) -> Vec<&'a OpcodeRecord> {
    let needle = name.to_lowercase();
    let (exact, partial): (Vec<_>, Vec<_>) = records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .partition(|r| r.name.to_lowercase() == needle);
    exact.into_iter().chain(partial).collect()
}

pub fn by_hex(records: &[OpcodeRecord], byte: u8) -> Option<&OpcodeRecord> {
    records.iter().find(|r| r.opcode == byte)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use test_case::test_case;

    use super::*;
    use crate::{parse::parse, tests::FIXTURE};

    fn names<'a>(records: &[&'a OpcodeRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn every_fixture_hex_is_found() {
        let records = parse(FIXTURE).unwrap();
        for r in &records {
            for input in [r.hex(), r.hex().to_lowercase(), format!("0x{}", r.hex())] {
                let query = Query::from_hex(&input).unwrap();
                let found = lookup(&records, &query);
                assert_eq!(found.len(), 1, "{input}");
                assert!(found[0].hex().eq_ignore_ascii_case(&r.hex()));
            }
        }
    }

    #[test_case("result", &["move-result", "move-result-wide", "move-result-object"])]
    #[test_case("RESULT", &["move-result", "move-result-wide", "move-result-object"]; "upper case")]
    #[test_case("move-result", &["move-result", "move-result-wide", "move-result-object"]; "exact")]
    #[test_case("move-result-object", &["move-result-object"]; "exact last")]
    #[test_case("const", &["const/4", "const/16", "const-string"])]
    #[test_case("const/16", &["const/16"]; "with slash")]
    #[test_case("move", &["move", "move-result", "move-result-wide", "move-result-object"])]
    #[test_case("result-w", &["move-result-wide"]; "inner substring")]
    #[test_case("xyzzy", &[]; "no match")]
    fn name(query: &str, expected: &[&str]) {
        let records = parse(FIXTURE).unwrap();
        let found = by_name(&records, query);
        assert_eq!(names(&found), expected);
    }

    #[test]
    fn exact_match_first() {
        let records = parse(FIXTURE).unwrap();
        let found = by_name(&records, "move-result-wide");
        assert_eq!(names(&found), ["move-result-wide"]);

        let found = by_name(&records, "Move");
        assert_eq!(found[0].name, "move");
    }

    #[test]
    fn name_results_are_complete() {
        let records = parse(FIXTURE).unwrap();
        for needle in ["m", "e", "-", "/", "ret", "OBJ", ""] {
            let found = by_name(&records, needle);
            let lower = needle.to_lowercase();
            assert!(found
                .iter()
                .all(|r| r.name.to_lowercase().contains(&lower)));

            let expected = records
                .iter()
                .filter(|r| r.name.to_lowercase().contains(&lower))
                .map(|r| r.opcode)
                .sorted()
                .collect_vec();
            let actual = found.iter().map(|r| r.opcode).sorted().collect_vec();
            assert_eq!(expected, actual, "{needle:?}");
        }
    }

    #[test]
    fn hex_not_in_table() {
        let records = parse(FIXTURE).unwrap();
        assert!(by_hex(&records, 0xfe).is_none());
        assert!(lookup(&records, &Query::from_hex("fe").unwrap()).is_empty());
    }

    #[test_case("zz")]
    #[test_case("100")]
    #[test_case("")]
    #[test_case("0 a"; "space inside")]
    fn invalid_hex(s: &str) {
        let err = Query::from_hex(s).unwrap_err();
        assert!(matches!(err, Error::InvalidHex { .. }), "{err:?}");
    }

    #[test_case(" 0a"; "space before")]
    #[test_case("0a "; "space after")]
    #[test_case("\t0x0A\n"; "tab and newline")]
    fn hex_is_trimmed(s: &str) {
        assert_eq!(Query::from_hex(s).unwrap(), Query::Hex(0x0a));
    }

    #[test]
    fn invalid_hex_keeps_cause() {
        let err = Query::from_hex("zz").unwrap_err();
        assert_eq!(err.to_string(), "invalid hex value \"zz\"");
        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "not a hex digit: 'z'");
    }

    #[test]
    fn display() {
        assert_eq!(Query::Hex(0x0a).to_string(), "0x0A");
        assert_eq!(Query::Name("const".into()).to_string(), "\"const\"");
    }
}
