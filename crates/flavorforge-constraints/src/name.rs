//! Parsing of catalogue names.
//!
//! Names follow `<process>::<tag>[<range>]@<experiment>-<year>[-<variant>]`,
//! e.g. `B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011`. The bracketed range is
//! informative only; the authoritative kinematics live in the template.

use std::fmt;

use flavorforge_core::{FlavorError, Result};

/// The parts of a catalogue name.
///
/// # Example
///
/// ```
/// use flavorforge_constraints::ConstraintName;
///
/// let name = ConstraintName::parse("B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011").unwrap();
/// assert_eq!(name.process, "B^0->K^*0mu^+mu^-");
/// assert_eq!(name.tag, "A_FB");
/// assert_eq!(name.range.as_deref(), Some("1.00,6.00"));
/// assert_eq!(name.experiment, "CDF");
/// assert_eq!(name.year, Some(2011));
/// assert_eq!(name.variant, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintName {
    pub process: String,
    pub tag: String,
    pub range: Option<String>,
    pub experiment: String,
    pub year: Option<u16>,
    pub variant: Option<String>,
}

impl ConstraintName {
    /// Splits a catalogue name into its parts.
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = || FlavorError::InvalidName(name.to_string());

        let (observable, source) = name.rsplit_once('@').ok_or_else(invalid)?;
        let (process, tag) = observable.split_once("::").ok_or_else(invalid)?;
        if process.is_empty() || tag.is_empty() || source.is_empty() {
            return Err(invalid());
        }

        let (tag, range) = match tag.split_once('[') {
            Some((tag, rest)) => {
                let range = rest.strip_suffix(']').ok_or_else(invalid)?;
                (tag, Some(range.to_string()))
            }
            None => (tag, None),
        };

        // The year is the first four-digit segment; everything before it
        // names the experiment (which may itself contain dashes).
        let segments: Vec<&str> = source.split('-').collect();
        let year_at = segments
            .iter()
            .position(|s| s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()));
        let (experiment, year, variant) = match year_at {
            Some(0) => return Err(invalid()),
            Some(at) => {
                let variant = segments[at + 1..].join("-");
                (
                    segments[..at].join("-"),
                    segments[at].parse().ok(),
                    (!variant.is_empty()).then_some(variant),
                )
            }
            None => (source.to_string(), None, None),
        };

        Ok(Self {
            process: process.to_string(),
            tag: tag.to_string(),
            range,
            experiment,
            year,
            variant,
        })
    }
}

impl fmt::Display for ConstraintName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.process, self.tag)?;
        if let Some(range) = &self.range {
            write!(f, "[{}]", range)?;
        }
        write!(f, "@{}", self.experiment)?;
        if let Some(year) = self.year {
            write!(f, "-{}", year)?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "-{}", variant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        let n = ConstraintName::parse("B^0_s->mu^+mu^-::BR_limit@CDF-2011").unwrap();
        assert_eq!(n.process, "B^0_s->mu^+mu^-");
        assert_eq!(n.tag, "BR_limit");
        assert_eq!(n.range, None);
        assert_eq!(n.experiment, "CDF");
        assert_eq!(n.year, Some(2011));
    }

    #[test]
    fn test_parse_dashed_experiment_and_variant() {
        let n = ConstraintName::parse("B^0_s->mu^+mu^-::BR@CMS-LHCb-2013-combination").unwrap();
        assert_eq!(n.experiment, "CMS-LHCb");
        assert_eq!(n.year, Some(2013));
        assert_eq!(n.variant.as_deref(), Some("combination"));
    }

    #[test]
    fn test_parse_single_edge_range() {
        let n = ConstraintName::parse("B->X_sgamma::BR[1.8]@BaBar-2012").unwrap();
        assert_eq!(n.tag, "BR");
        assert_eq!(n.range.as_deref(), Some("1.8"));
    }

    #[test]
    fn test_parse_without_year() {
        let n = ConstraintName::parse("B->K^*gamma::S_K@Toy").unwrap();
        assert_eq!(n.experiment, "Toy");
        assert_eq!(n.year, None);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for name in [
            "no-separator",
            "B->K^*gamma::BR",
            "B->K^*gamma::BR[1.0@CLEO-2000",
            "B->K^*gamma::BR@2000",
        ] {
            let err = ConstraintName::parse(name).unwrap_err();
            assert_eq!(err, FlavorError::InvalidName(name.to_string()));
            assert!(!err.is_recoverable());
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for name in [
            "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011",
            "B^0_s->mu^+mu^-::BR@CMS-LHCb-2013",
            "B^0->K^*0gamma::S_K+C_K@HFAG-2011",
        ] {
            assert_eq!(ConstraintName::parse(name).unwrap().to_string(), name);
        }
    }
}
