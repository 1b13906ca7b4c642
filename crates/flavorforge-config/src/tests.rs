//! Tests for constraint configuration.

use super::*;

const TOML: &str = r#"
skip_unknown = false
constraints = [
    "B^0_s->mu^+mu^-::BR_limit@CDF-2011",
    { name = "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011", options = { l = "e", model = "SM" } },
]

[options]
model = "WilsonScan"
form-factors = "KMPW2010"
"#;

const YAML: &str = r#"
    skip_unknown: false
    constraints:
      - "B^0_s->mu^+mu^-::BR_limit@CDF-2011"
      - name: "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011"
        options:
          l: e
          model: SM
    options:
      model: WilsonScan
      form-factors: KMPW2010
"#;

#[test]
fn test_toml_parsing() {
    let config = ConstraintsConfig::from_toml_str(TOML).unwrap();
    assert!(!config.skip_unknown);
    assert_eq!(config.constraints.len(), 2);
    assert_eq!(config.constraints[0].name(), "B^0_s->mu^+mu^-::BR_limit@CDF-2011");
    assert!(config.constraints[0].options().is_none());
    assert_eq!(config.options.get("model"), Some("WilsonScan"));
}

#[test]
fn test_yaml_parsing() {
    let config = ConstraintsConfig::from_yaml_str(YAML).unwrap();
    assert!(!config.skip_unknown);
    assert_eq!(
        config.constraints[1].options().and_then(|o| o.get("l")),
        Some("e")
    );
}

#[test]
fn test_toml_and_yaml_agree() {
    assert_eq!(
        ConstraintsConfig::from_toml_str(TOML).unwrap(),
        ConstraintsConfig::from_yaml_str(YAML).unwrap()
    );
}

#[test]
fn test_defaults() {
    let config = ConstraintsConfig::from_toml_str("").unwrap();
    assert!(config.constraints.is_empty());
    assert!(config.options.is_empty());
    assert!(config.skip_unknown);
    assert_eq!(config, ConstraintsConfig::default());
}

#[test]
fn test_selection_options_take_precedence() {
    let config = ConstraintsConfig::from_toml_str(TOML).unwrap();
    let selections: Vec<_> = config.selections().collect();

    let (_, plain) = &selections[0];
    assert_eq!(plain.get("model"), Some("WilsonScan"));
    assert_eq!(plain.get("l"), None);

    let (name, detailed) = &selections[1];
    assert_eq!(*name, "B^0->K^*0mu^+mu^-::A_FB[1.00,6.00]@CDF-2011");
    assert_eq!(detailed.get("model"), Some("SM"));
    assert_eq!(detailed.get("l"), Some("e"));
    assert_eq!(detailed.get("form-factors"), Some("KMPW2010"));
}

#[test]
fn test_builder() {
    let config = ConstraintsConfig::new()
        .with_constraint("B^0_s->mu^+mu^-::BR_limit@CDF-2011")
        .with_constraint_options(
            "B^0->K^*0gamma::BR@BaBar-2009",
            Options::new().with("form-factors", "BZ2004"),
        )
        .with_option("model", "SM")
        .with_skip_unknown(false);

    assert_eq!(config.constraints.len(), 2);
    assert!(!config.skip_unknown);
    assert!(config.validate().is_ok());
    assert_eq!(
        config.options_for(&config.constraints[1]).to_string(),
        "form-factors=BZ2004,model=SM"
    );
}

#[test]
fn test_duplicate_selection_is_invalid() {
    let err = ConstraintsConfig::from_toml_str(
        r#"constraints = ["B->K^*gamma::BR@A-2000", { name = "B->K^*gamma::BR@A-2000" }]"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_empty_name_is_invalid() {
    let err = ConstraintsConfig::from_yaml_str("constraints: [\"  \"]").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_malformed_input() {
    assert!(matches!(
        ConstraintsConfig::from_toml_str("constraints = 3"),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        ConstraintsConfig::from_yaml_str("constraints: {"),
        Err(ConfigError::Yaml(_))
    ));
    assert!(matches!(
        ConstraintsConfig::load("/nonexistent/constraints.toml"),
        Err(ConfigError::Io(_))
    ));
}
