use ironchain::testing::*;
use ironchain::*;

#[test]
fn reduce_folds_left_to_right() {
    let joined = from_vec(vec!["a", "b", "c"]).reduce(String::new(), |mut acc, v, _, _| {
        acc.push_str(v);
        acc
    });
    assert_eq!(joined, "abc");
}

#[test]
fn reduce_sees_keys_and_snapshot() {
    let chain = Chain::from(numbers_by_name());
    let weighted = chain.reduce(0, |acc, v, k, all| {
        assert_eq!(all.get(k), Some(v));
        acc + v * i64::try_from(all.len()).unwrap_or(0)
    });
    assert_eq!(weighted, 75);
}

#[test]
fn reduce_on_empty_returns_init() {
    let out = from_vec(Vec::<i32>::new()).reduce(42, |acc, v, _, _| acc + v);
    assert_eq!(out, 42);
}

#[test]
fn reduce_leaves_chain_usable() {
    let chain = from_vec(vec![1, 2, 3]);
    let sum = chain.reduce(0, |acc, v, _, _| acc + v);
    let doubled = chain.map(|v, _, _| v * 2).get_values();

    assert_eq!(sum, 6);
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn reduce_into_dedupes_by_value_then_reads_keys() {
    let emails = from_vec(vec![
        "ann@example.com",
        "bob@example.com",
        "ann@example.com",
        "cid@example.com",
        "bob@example.com",
    ]);

    let counts = emails.reduce_into(|acc: &mut Entries<u32>, v, _, _| {
        let n = acc.get(*v).copied().unwrap_or(0);
        acc.insert(*v, n + 1);
    });

    assert_keys_equal(
        &counts.get_keys(),
        &["ann@example.com", "bob@example.com", "cid@example.com"],
    );
    assert_values_equal(&counts.get_values(), &[2, 2, 1]);
}

#[test]
fn reduce_into_keeps_options() {
    let options = ChainOptions::default().with_filter_keys(KeyPolicy::Reindex);
    let out = from_vec(vec![1, 2, 3])
        .with_options(options)
        .reduce_into(|acc: &mut Entries<i32>, v, k, _| {
            acc.insert(format!("k{k}"), *v);
        });
    assert_eq!(out.options(), options);
    assert_keys_equal(&out.get_keys(), &["k0", "k1", "k2"]);
}
