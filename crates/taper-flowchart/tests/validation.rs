use taper_flowchart::error::FlowchartError;
use taper_flowchart::graph::{AnswerOption, Flowchart, FlowchartNode};

fn question(id: &str, options: Vec<AnswerOption>) -> FlowchartNode {
    FlowchartNode::question(id, id, "prompt", options)
}

#[test]
fn a_dangling_reference_is_refused_at_load() {
    let err = Flowchart::new(
        "q",
        vec![question(
            "q",
            vec![AnswerOption::new("go", "missing_node")],
        )],
    )
    .expect_err("target does not exist");

    match err {
        FlowchartError::DanglingReference { node, label, target } => {
            assert_eq!(node, "q");
            assert_eq!(label, "go");
            assert_eq!(target, "missing_node");
        }
        other => panic!("expected DanglingReference, got {other:?}"),
    }
}

#[test]
fn a_duplicate_node_id_is_refused() {
    let err = Flowchart::new(
        "end",
        vec![
            FlowchartNode::outcome("end", "End", "Done."),
            FlowchartNode::outcome("end", "End Again", "Done again."),
        ],
    )
    .expect_err("duplicate id");
    assert!(matches!(err, FlowchartError::DuplicateNode(id) if id == "end"));
}

#[test]
fn an_unknown_start_node_is_refused() {
    let err = Flowchart::new("nowhere", vec![FlowchartNode::outcome("end", "End", "Done.")])
        .expect_err("start is absent");
    assert!(matches!(err, FlowchartError::UnknownStart(id) if id == "nowhere"));
}

#[test]
fn an_optionless_question_is_refused() {
    let err = Flowchart::new("q", vec![question("q", vec![])]).expect_err("no options");
    assert!(matches!(err, FlowchartError::EmptyQuestion(id) if id == "q"));
}

#[test]
fn a_consistent_table_loads() {
    let chart = Flowchart::new(
        "q",
        vec![
            question("q", vec![AnswerOption::new("done", "end")]),
            FlowchartNode::outcome("end", "End", "Done."),
        ],
    )
    .expect("table is consistent");

    assert_eq!(chart.start_id(), "q");
    assert_eq!(chart.len(), 2);
    assert!(chart.node("end").is_some());
    assert!(chart.node("absent").is_none());
}

#[test]
fn cycles_are_permitted_by_validation() {
    // The renderer must not assume acyclicity; only the shipped tables are
    // authored as DAGs.
    let chart = Flowchart::new(
        "a",
        vec![
            question("a", vec![AnswerOption::new("to b", "b")]),
            question("b", vec![AnswerOption::new("back to a", "a")]),
        ],
    );
    assert!(chart.is_ok());
}
