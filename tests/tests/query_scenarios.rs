//! Pattern matching and join scenarios.

use triplet_tests::prelude::*;

mod predicate_mismatch {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("predicate_mismatch")
            .graph(graph![(ex("x1"), ex("p1"), ex("x2"))])
            .step(
                "ground_pattern_with_other_predicate",
                Query::builder().triple(ex("x1"), ex("p2"), ex("x2")),
                |a| a.empty(),
            )
            .step(
                "ground_pattern_present",
                Query::builder().triple(ex("x1"), ex("p1"), ex("x2")),
                |a| a.rows(1).returns(vec![row! {}]),
            )
    }

    #[test]
    fn test_ground_patterns_match_exact_statements_only() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod literal_object {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("literal_object")
            .graph(graph![
                (ex("x1"), ex("p1"), 123.0),
                (ex("big1"), ex("p2"), 9_007_199_254_740_993i64),
                (ex("big2"), ex("p2"), 9_007_199_254_740_992i64),
            ])
            .step(
                "match_double",
                Query::builder().triple(var("s"), ex("p1"), 123.0),
                |a| a.variables(&["s"]).returns(vec![row! { s: ex("x1") }]),
            )
            .step(
                "match_integer_with_same_value",
                Query::builder().triple(var("s"), ex("p1"), 123),
                |a| a.returns(vec![row! { s: ex("x1") }]),
            )
            .step(
                "match_typed_decimal",
                Query::builder().triple(
                    var("s"),
                    ex("p1"),
                    Literal::typed("123.00", "http://www.w3.org/2001/XMLSchema#decimal"),
                ),
                |a| a.rows(1),
            )
            .step(
                "plain_string_is_not_a_number",
                Query::builder().triple(var("s"), ex("p1"), "123.0"),
                |a| a.empty(),
            )
            .step(
                "large_integers_are_not_rounded",
                Query::builder().triple(var("s"), ex("p2"), 9_007_199_254_740_992i64),
                |a| a.returns(vec![row! { s: ex("big2") }]),
            )
            .step(
                "bind_the_literal",
                Query::builder().triple(ex("x1"), ex("p1"), var("o")),
                |a| a.returns(vec![row! { o: 123.0 }]),
            )
    }

    #[test]
    fn test_literals_compare_by_value() {
        scenario().run().unwrap();
    }
}

mod shared_variable_join {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("shared_variable_join")
            .graph(graph![
                (ex("x2"), ex("p1"), ex("x1")),
                (ex("x3"), ex("p2"), ex("x2")),
                (ex("x4"), ex("p2"), ex("x2")),
            ])
            .step(
                "two_patterns",
                Query::builder()
                    .triple(var("m"), ex("p1"), ex("x1"))
                    .triple(var("s"), ex("p2"), var("m")),
                |a| {
                    a.variables(&["m", "s"]).returns(vec![
                        row! { m: ex("x2"), s: ex("x3") },
                        row! { m: ex("x2"), s: ex("x4") },
                    ])
                },
            )
            .step(
                "graph_order_is_kept",
                Query::builder()
                    .triple(var("m"), ex("p1"), ex("x1"))
                    .triple(var("s"), ex("p2"), var("m")),
                |a| {
                    a.first(row! { s: ex("x3") })
                        .last(row! { s: ex("x4") })
                        .ordered()
                        .returns(vec![
                            row! { m: ex("x2"), s: ex("x3") },
                            row! { m: ex("x2"), s: ex("x4") },
                        ])
                },
            )
            .step(
                "reversed_order_same_set",
                Query::builder()
                    .triple(var("s"), ex("p2"), var("m"))
                    .triple(var("m"), ex("p1"), ex("x1")),
                |a| {
                    a.variables(&["s", "m"]).returns(vec![
                        row! { m: ex("x2"), s: ex("x4") },
                        row! { m: ex("x2"), s: ex("x3") },
                    ])
                },
            )
    }

    #[test]
    fn test_join_binds_shared_variables() {
        scenario().run().unwrap();
    }
}

mod cross_product {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("cross_product")
            .graph(graph![
                (ex("a"), ex("p"), ex("b")),
                (ex("c"), ex("q"), ex("d")),
            ])
            .step(
                "disjoint_variables",
                Query::builder()
                    .triple(var("s1"), var("p1"), var("o1"))
                    .triple(var("s2"), var("p2"), var("o2")),
                |a| {
                    a.rows(4)
                        .no_duplicates()
                        .contains(row! { s1: ex("a"), s2: ex("a") })
                        .contains(row! { s1: ex("a"), s2: ex("c") })
                        .contains(row! { s1: ex("c"), s2: ex("a") })
                        .contains(row! { s1: ex("c"), s2: ex("c") })
                },
            )
    }

    #[test]
    fn test_unrelated_patterns_form_cross_product() {
        scenario().run().unwrap();
    }
}

mod pruning {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("pruning")
            .graph(graph![
                (ex("x1"), ex("p1"), ex("x2")),
                (ex("x2"), ex("p1"), ex("x3")),
            ])
            .step(
                "missing_statement_then_everything",
                Query::builder()
                    .triple(ex("x1"), ex("p2"), ex("x2"))
                    .triple(var("s"), var("p"), var("o")),
                |a| a.empty(),
            )
            .step(
                "everything_then_missing_statement",
                Query::builder()
                    .triple(var("s"), var("p"), var("o"))
                    .triple(ex("x1"), ex("p2"), ex("x2")),
                |a| a.empty(),
            )
            .step(
                "chain_without_continuation",
                Query::builder()
                    .triple(var("a"), ex("p1"), var("b"))
                    .triple(var("b"), ex("p1"), var("c"))
                    .triple(var("c"), ex("p1"), var("d")),
                |a| a.empty(),
            )
            .step(
                "chain_with_continuation",
                Query::builder()
                    .triple(var("a"), ex("p1"), var("b"))
                    .triple(var("b"), ex("p1"), var("c")),
                |a| a.returns(vec![row! { a: ex("x1"), b: ex("x2"), c: ex("x3") }]),
            )
    }

    #[test]
    fn test_unmatched_patterns_empty_the_result() {
        scenario().run().unwrap();
    }
}

mod repeated_variable {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("repeated_variable")
            .graph(graph![
                (ex("a"), ex("same"), ex("a")),
                (ex("a"), ex("same"), ex("b")),
                (ex("b"), ex("b"), ex("b")),
            ])
            .step(
                "subject_equals_object",
                Query::builder().triple(var("x"), ex("same"), var("x")),
                |a| a.variables(&["x"]).returns(vec![row! { x: ex("a") }]),
            )
            .step(
                "all_positions_equal",
                Query::builder().triple(var("x"), var("x"), var("x")),
                |a| a.returns(vec![row! { x: ex("b") }]),
            )
    }

    #[test]
    fn test_repeated_variable_must_bind_consistently() {
        scenario().run().unwrap();
    }
}

mod empty_inputs {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("empty_inputs")
            .step(
                "no_patterns",
                Query::new(),
                |a| a.variables(&[]).returns(vec![row! {}]),
            )
            .step(
                "pattern_over_empty_graph",
                Query::builder().triple(var("s"), var("p"), var("o")),
                |a| a.variables(&["s", "p", "o"]).empty(),
            )
    }

    #[test]
    fn test_empty_graph_and_empty_query() {
        scenario().run().unwrap();
    }
}

mod blank_nodes {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("blank_nodes")
            .graph(graph![
                (Term::blank("b1"), ex("name"), "first"),
                (Term::blank("b2"), ex("name"), "second"),
            ])
            .step(
                "blank_subject_binds",
                Query::builder().triple(var("s"), ex("name"), "second"),
                |a| a.returns(vec![row! { s: Term::blank("b2") }]),
            )
            .step(
                "blank_node_in_pattern_is_a_constant",
                Query::builder().triple(Term::blank("b1"), ex("name"), var("n")),
                |a| a.returns(vec![row! { n: "first" }]),
            )
    }

    #[test]
    fn test_blank_nodes_match_by_label() {
        scenario().run().unwrap();
    }
}

mod invalid_patterns {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("invalid_patterns")
            .step(
                "literal_subject",
                Query::builder().triple("x", ex("p"), var("o")),
                |a| a.error("subject must be"),
            )
            .step(
                "blank_predicate",
                Query::builder().triple(var("s"), Term::blank("p"), var("o")),
                |a| a.error("predicate must be"),
            )
            .step(
                "two_terms",
                Query::builder().terms(vec![var("s"), ex("p")]),
                |a| a.error("got 2 term(s)"),
            )
            .step(
                "four_terms",
                Query::builder().terms(vec![var("s"), ex("p"), var("o"), var("g")]),
                |a| a.error("got 4 term(s)"),
            )
            .step(
                "missing_object",
                Pattern::builder()
                    .subject(var("s"))
                    .predicate(ex("p"))
                    .build()
                    .map(|pattern| Query::from_patterns([pattern]))
                    .map_err(QueryError::from),
                |a| a.error("missing object position"),
            )
    }

    #[test]
    fn test_malformed_patterns_are_rejected() {
        scenario().run().unwrap();
    }
}

mod people {
    use super::*;
    use triplet_tests::fixtures::people;

    fn foaf(name: &str) -> Term {
        Term::iri(format!("http://xmlns.com/foaf/0.1/{}", name))
    }

    pub fn scenario() -> Scenario {
        Scenario::new("people")
            .graph(people())
            .step(
                "friends_of_friends",
                Query::builder()
                    .triple(ex("alice"), foaf("knows"), var("f"))
                    .triple(var("f"), foaf("knows"), var("ff")),
                |a| {
                    a.returns(vec![
                        row! { f: ex("bob"), ff: ex("carol") },
                        row! { f: ex("carol"), ff: ex("alice") },
                    ])
                },
            )
            .step(
                "same_age",
                Query::builder()
                    .triple(var("a"), foaf("age"), var("n"))
                    .triple(var("b"), foaf("age"), var("n")),
                |a| {
                    a.rows(7)
                        .contains(row! { a: ex("bob"), b: ex("dave"), n: 27 })
                        .contains(row! { a: ex("dave"), b: ex("bob"), n: 27 })
                }
            )
            .step(
                "language_tagged_nick",
                Query::builder().triple(var("who"), ex("nick"), Literal::lang("Alicia", "ES")),
                |a| a.returns(vec![row! { who: ex("alice") }]),
            )
            .step(
                "mutual_friends",
                Query::builder()
                    .triple(var("x"), foaf("knows"), var("y"))
                    .triple(var("y"), foaf("knows"), var("x")),
                |a| a.rows(4).no_duplicates(),
            )
    }

    #[test]
    fn test_joins_over_people_graph() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_variables_survive_empty_results() {
    let graph = graph![(ex("a"), ex("p"), ex("b"))];
    let query = Query::builder()
        .triple(var("s"), ex("missing"), var("o"))
        .build()
        .unwrap();

    let solutions = query.execute(&graph).unwrap();
    assert!(solutions.is_empty());
    assert_eq!(solutions.column("s").unwrap(), Vec::<Option<&Term>>::new());
    assert!(matches!(
        solutions.column("nope"),
        Err(QueryError::UnboundVariable { .. })
    ));
}

#[test]
fn test_graph_is_not_modified_by_execution() {
    let graph = triplet_tests::fixtures::people();
    let before: Vec<Statement> = graph.iter().cloned().collect();

    let query = Query::builder()
        .triple(var("s"), var("p"), var("o"))
        .build()
        .unwrap();
    assert_eq!(query.count(&graph).unwrap(), graph.len());

    let after: Vec<Statement> = graph.iter().cloned().collect();
    pretty_assertions::assert_eq!(before, after);
}
