use ironchain::{ChainOptions, KeyPolicy};

#[test]
fn default_policy_preserves_keys() {
    assert_eq!(ChainOptions::default().filter_keys, KeyPolicy::Preserve);
}

#[test]
fn policy_parses_case_insensitively() -> anyhow::Result<()> {
    assert_eq!("reindex".parse::<KeyPolicy>()?, KeyPolicy::Reindex);
    assert_eq!(" Preserve ".parse::<KeyPolicy>()?, KeyPolicy::Preserve);
    assert!("renumber".parse::<KeyPolicy>().is_err());
    Ok(())
}

#[test]
fn policy_display_matches_parse() -> anyhow::Result<()> {
    for policy in [KeyPolicy::Preserve, KeyPolicy::Reindex] {
        assert_eq!(policy.to_string().parse::<KeyPolicy>()?, policy);
    }
    Ok(())
}

#[test]
fn options_load_from_json_config() -> anyhow::Result<()> {
    let opts: ChainOptions = serde_json::from_str(r#"{"filter_keys": "reindex"}"#)?;
    assert_eq!(opts.filter_keys, KeyPolicy::Reindex);

    let defaults: ChainOptions = serde_json::from_str("{}")?;
    assert_eq!(defaults, ChainOptions::default());
    Ok(())
}
