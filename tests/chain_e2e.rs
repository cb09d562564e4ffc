use fluentseq::{build, builtins, Sequence, Value};

fn standard_seq() -> Sequence {
    build(builtins::standard())
}

#[test]
fn simple_chain() {
    let seq = standard_seq();
    let result = seq
        .call("add", &[Value::Int(2), Value::Int(4)])
        .unwrap()
        .call("add", &[Value::Int(10)])
        .unwrap()
        .calculate();
    assert_eq!(result, Value::Int(16));
}

#[test]
fn long_single_type_chain() {
    let seq = standard_seq();
    let result = seq
        .call("add", &[Value::Int(4), Value::Int(5)])
        .unwrap()
        .call("add", &[Value::Int(5)])
        .unwrap()
        .call("add", &[Value::Int(4)])
        .unwrap()
        .call("add", &[Value::Int(7)])
        .unwrap()
        .call("double", &[])
        .unwrap()
        .call("double", &[])
        .unwrap()
        .calculate();
    assert_eq!(result, Value::Int(100));
}

#[test]
fn chain_crossing_value_types() {
    // int -> int -> bool -> bool -> int -> int
    let seq = standard_seq();
    let result = seq
        .call("add", &[Value::Int(2), Value::Int(4)])
        .unwrap()
        .call("add", &[Value::Int(-6)])
        .unwrap()
        .call("to_bool", &[])
        .unwrap()
        .call("not", &[])
        .unwrap()
        .call("to_int", &[])
        .unwrap()
        .call("double", &[])
        .unwrap()
        .calculate();
    assert_eq!(result, Value::Int(2));
}

#[test]
fn chain_ending_on_bool() {
    let seq = standard_seq();
    let result = seq
        .call("add", &[Value::Int(2), Value::Int(4)])
        .unwrap()
        .call("to_bool", &[])
        .unwrap()
        .calculate();
    assert_eq!(result, Value::Bool(true));
}

#[test]
fn text_chain() {
    let seq = standard_seq();
    let result = seq
        .call("concat", &[Value::Text("foo".into()), Value::Text("bar".into())])
        .unwrap()
        .call("length", &[])
        .unwrap()
        .call("double", &[])
        .unwrap()
        .calculate();
    assert_eq!(result, Value::Int(12));
}

#[test]
fn root_is_reusable() {
    let seq = standard_seq();
    assert_eq!(
        seq.call("add", &[Value::Int(3), Value::Int(4)]).unwrap().calculate(),
        Value::Int(7)
    );
    assert_eq!(
        seq.call("add", &[Value::Int(1), Value::Int(2)]).unwrap().calculate(),
        Value::Int(3)
    );
}

#[test]
fn steps_are_reusable_and_branchable() {
    let seq = standard_seq();

    let s1 = seq.call("add", &[Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(s1.calculate(), Value::Int(3));
    assert_eq!(s1.call("double", &[]).unwrap().calculate(), Value::Int(6));
    assert_eq!(
        s1.call("add", &[Value::Int(1)]).unwrap().calculate(),
        Value::Int(4)
    );
    // Branching above must not have touched s1.
    assert_eq!(s1.calculate(), Value::Int(3));

    let s2 = s1.call("add", &[Value::Int(5)]).unwrap();
    assert_eq!(s2.call("double", &[]).unwrap().calculate(), Value::Int(16));
    assert_eq!(
        s2.call("add", &[Value::Int(3)]).unwrap().calculate(),
        Value::Int(11)
    );
    assert_eq!(s2.calculate(), Value::Int(8));
    assert_eq!(s1.calculate(), Value::Int(3));
}

#[test]
fn identical_chains_are_deterministic() {
    let run = || {
        standard_seq()
            .call("add", &[Value::Int(4), Value::Int(5)])
            .unwrap()
            .call("mul", &[Value::Int(3)])
            .unwrap()
            .call("sub", &[Value::Int(7)])
            .unwrap()
            .calculate()
    };
    assert_eq!(run(), run());
    assert_eq!(run(), Value::Int(20));
}

#[test]
fn handles_work_across_threads() {
    let seq = standard_seq();
    let base = seq.call("add", &[Value::Int(10), Value::Int(10)]).unwrap();

    let mut handles = Vec::new();
    for i in 0..4i64 {
        let branch = base.clone();
        handles.push(std::thread::spawn(move || {
            branch.call("add", &[Value::Int(i)]).unwrap().calculate()
        }));
    }
    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result, Value::Int(20 + i as i64));
    }
    // Concurrent branching never disturbed the shared ancestor.
    assert_eq!(base.calculate(), Value::Int(20));
}
