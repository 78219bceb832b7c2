use anyhow::anyhow;
use ironchain::testing::*;
use ironchain::*;

#[test]
fn try_map_succeeds_like_map() -> anyhow::Result<()> {
    let parsed = from_pairs([("a", "1"), ("b", "2")]).try_map(|v, _, _| v.parse::<i32>())?;
    assert_entries_equal(parsed.get(), &[("a", 1), ("b", 2)]);
    Ok(())
}

#[test]
fn try_map_failure_names_key_and_keeps_chain() {
    let raw = from_pairs([("a", "1"), ("b", "two"), ("c", "3")]);
    let mut calls = 0;
    let err = raw
        .try_map(|v, _, _| {
            calls += 1;
            v.parse::<i32>()
        })
        .unwrap_err();

    assert!(err.to_string().contains("'b'"), "unexpected error: {err}");
    assert!(err.chain().any(|cause| cause.to_string().contains("invalid digit")));
    // aborted at the failing entry
    assert_eq!(calls, 2);
    // prior state intact
    assert_entries_equal(raw.get(), &[("a", "1"), ("b", "two"), ("c", "3")]);
}

#[test]
fn try_filter_succeeds_like_filter() -> anyhow::Result<()> {
    let out = Chain::from(numbers_by_name())
        .try_filter(|v, _, _| Ok::<_, anyhow::Error>(v % 2 == 0))?;
    assert_entries_equal(out.get(), &[("two", 2), ("four", 4)]);
    Ok(())
}

#[test]
fn try_filter_failure_keeps_chain() {
    let chain = Chain::from(numbers_by_name());
    let result = chain.try_filter(|v, _, _| {
        if *v == 4 {
            Err(anyhow!("four is not allowed"))
        } else {
            Ok(true)
        }
    });

    let err = result.unwrap_err();
    assert!(err.to_string().contains("'four'"));
    assert_eq!(chain.len(), 5);
}

#[test]
fn try_filter_respects_key_policy() -> anyhow::Result<()> {
    let out = from_pairs([("x", 1), ("y", 2), ("z", 3)])
        .with_options(ChainOptions::default().with_filter_keys(KeyPolicy::Reindex))
        .try_filter(|v, _, _| Ok::<_, anyhow::Error>(*v != 2))?;
    assert_entries_equal(out.get(), &[(0, 1), (1, 3)]);
    Ok(())
}
