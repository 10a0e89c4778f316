//! Update expression parsing through the public API.

#[cfg(test)]
mod tests {
    use dynamock_core::expression::parse_update_expression_with;
    use dynamock_core::{AddExpression, ClauseScan, parse_update_expression};

    #[test]
    fn test_should_parse_mixed_expression() {
        let parsed = parse_update_expression("SET a = :v ADD x y, z w DELETE d REMOVE r");
        assert_eq!(
            parsed.add_expressions,
            vec![AddExpression::new("x", "y"), AddExpression::new("z", "w")]
        );
        assert_eq!(parsed.set_expressions, vec!["a = :v"]);
        assert_eq!(parsed.remove_expressions, vec!["r"]);
        assert_eq!(parsed.delete_expressions, vec!["d"]);
    }

    #[test]
    fn test_should_ignore_clause_order_and_spacing() {
        let a = parse_update_expression("SET #s = :s, #n = :n ADD #c :one REMOVE old");
        let b = parse_update_expression("REMOVE  old ADD #c  :one SET #s=:s,#n =:n");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "SET #s = :s, #n = :n REMOVE old ADD #c :one");
    }

    #[test]
    fn test_should_yield_nothing_for_add_without_pairs() {
        assert!(parse_update_expression("ADD").add_expressions.is_empty());
        assert!(parse_update_expression("").is_empty());
    }

    #[test]
    fn test_should_respect_word_boundaries_when_asked() {
        let expr = "SET ADDENDUM = :v";
        assert!(parse_update_expression(expr).set_expressions.is_empty());
        assert_eq!(
            parse_update_expression_with(expr, ClauseScan::WordBoundary).set_expressions,
            vec!["ADDENDUM = :v"]
        );
    }
}
