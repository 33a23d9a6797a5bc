use seqs::{
    ArraySequence,
    LinkedSequence,
    Sequence,
};

#[test]
fn linked() {
    let mut seq = LinkedSequence::<i32>::new();
    insta::assert_snapshot!(seq.to_string(), @"{}");
    seq.append(7);
    insta::assert_snapshot!(seq.to_string(), @"{7}");
    seq.append(8);
    seq.prepend(6);
    insta::assert_snapshot!(seq.to_string(), @"{6, 7, 8}");
}

#[test]
fn array() {
    let mut seq = ArraySequence::<i32>::new();
    insta::assert_snapshot!(seq.to_string(), @"{}");
    seq.append(7);
    insta::assert_snapshot!(seq.to_string(), @"{7}");
    seq.append(8);
    seq.prepend(6);
    insta::assert_snapshot!(seq.to_string(), @"{6, 7, 8}");
}

#[test]
fn through_trait_object() {
    let seqs: Vec<Box<dyn Sequence<i32>>> = vec![
        Box::new((1..=3).collect::<LinkedSequence<_>>()),
        Box::new((1..=3).collect::<ArraySequence<_>>()),
    ];
    for seq in seqs {
        assert_eq!(seq.to_string(), "{1, 2, 3}");
    }
}

#[test]
fn non_numeric_values() {
    let seq: LinkedSequence<&str> = vec!["a", "b"].into_iter().collect();
    insta::assert_snapshot!(seq.to_string(), @"{a, b}");
}

#[test]
fn rendering_spends_cursor() {
    let seq: ArraySequence<i32> = (1..=3).collect();
    seq.reset_cursor().unwrap();
    let _ = seq.to_string();
    assert!(!seq.has_more());
}

#[test]
fn interleaved_demo_rendering() {
    let mut seq = LinkedSequence::<i32>::new();
    for i in 1..10 {
        seq.append(i);
        seq.prepend(-i);
    }
    *seq.get_mut(0).unwrap() = 77;
    insta::assert_snapshot!(
        seq.to_string(),
        @"{77, -8, -7, -6, -5, -4, -3, -2, -1, 1, 2, 3, 4, 5, 6, 7, 8, 9}"
    );
}
