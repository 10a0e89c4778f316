//! Expectation queue behaviour seen from an application service.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use dynamock_core::{CallContext, MatchField, MockConfig, MockError, UpdateItemApi};
    use dynamock_model::{AttributeValue, UpdateItemInput, UpdateItemOutput};

    use crate::{OrderCounter, mock, mock_with, order_key};

    fn views(n: i64) -> UpdateItemOutput {
        UpdateItemOutput {
            attributes: HashMap::from([("views".to_owned(), AttributeValue::n(n))]),
            ..Default::default()
        }
    }

    #[test]
    fn test_should_return_canned_output_for_matching_call() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item()
            .to_table("orders")
            .with_keys(order_key("42"))
            .with_update_expression("ADD #views :by")
            .with_expression_attribute_names(HashMap::from([(
                "#views".to_owned(),
                "views".to_owned(),
            )]))
            .with_expression_attribute_values(HashMap::from([(
                ":by".to_owned(),
                AttributeValue::n(2),
            )]))
            .will_return(views(7));

        let counter = OrderCounter::new(client, "orders");
        assert_eq!(counter.bump_views("42", 2)?, Some("7".to_owned()));
        mock.expectations_were_met()?;
        Ok(())
    }

    #[test]
    fn test_should_answer_calls_in_registration_order() -> anyhow::Result<()> {
        let (client, mock) = mock();
        for n in 1..=3 {
            mock.expect_update_item().to_table("orders").will_return(views(n));
        }

        let counter = OrderCounter::new(client, "orders");
        let seen = (0..3)
            .map(|_| counter.bump_views("1", 1))
            .collect::<anyhow::Result<Vec<_>>>()?;
        assert_eq!(
            seen,
            vec![Some("1".to_owned()), Some("2".to_owned()), Some("3".to_owned())]
        );
        mock.expectations_were_met()?;
        Ok(())
    }

    #[test]
    fn test_should_report_wrong_key() {
        let (client, mock) = mock();
        mock.expect_update_item()
            .to_table("orders")
            .with_keys(order_key("43"))
            .will_return(views(1));

        let counter = OrderCounter::new(client, "orders");
        let err = counter.bump_views("42", 1).unwrap_err();
        let mock_err = err.downcast_ref::<MockError>().unwrap();
        assert_eq!(mock_err.field(), Some(MatchField::Key));
        assert_eq!(
            mock_err.to_string(),
            "Expect key map[pk: {S: ORDER#43}] but found key map[pk: {S: ORDER#42}]"
        );
    }

    #[test]
    fn test_should_report_wrong_table_and_keep_expectation() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item().to_table("orders").will_return(views(5));

        let wrong = OrderCounter::new(client.clone(), "archive");
        let err = wrong.bump_views("1", 1).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Expect table orders but found table archive"
        );
        assert_eq!(mock.pending_update_items(), 1);

        let right = OrderCounter::new(client, "orders");
        assert_eq!(right.bump_views("1", 1)?, Some("5".to_owned()));
        Ok(())
    }

    #[test]
    fn test_should_move_on_after_mismatch_when_consuming() -> anyhow::Result<()> {
        let (client, mock) = mock_with(MockConfig::default().consume_on_mismatch());
        mock.expect_update_item().to_table("archive").will_return(views(1));
        mock.expect_update_item().to_table("orders").will_return(views(2));

        let counter = OrderCounter::new(client, "orders");
        assert!(counter.bump_views("1", 1).is_err());
        assert_eq!(counter.bump_views("1", 1)?, Some("2".to_owned()));
        mock.expectations_were_met()?;
        Ok(())
    }

    #[test]
    fn test_should_report_empty_queue_per_entry_point() {
        let (client, _mock) = mock();
        let counter = OrderCounter::new(client, "orders");

        let err = counter.bump_views("1", 1).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Update Item Expectation Not Found");

        let err = counter
            .set_status(&CallContext::new(), "1", "shipped")
            .unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "Update Item With Context Expectation Not Found"
        );
    }

    #[test]
    fn test_should_match_context_call_on_condition_expression() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item()
            .to_table("orders")
            .with_condition_expression("attribute_exists(pk)")
            .with_update_expression("SET #status = :status REMOVE pending_since")
            .register();

        let counter = OrderCounter::new(client, "orders");
        let ctx = CallContext::with_request_id("req-7");
        counter.set_status(&ctx, "9", "shipped")?;
        mock.expectations_were_met()?;
        Ok(())
    }

    #[test]
    fn test_should_treat_unset_constraints_as_wildcards() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item().will_return(views(3));

        let counter = OrderCounter::new(client, "anything");
        assert_eq!(counter.bump_views("any", 99)?, Some("3".to_owned()));
        Ok(())
    }

    #[test]
    fn test_should_enforce_empty_map_constraint() {
        let (client, mock) = mock();
        mock.expect_update_item()
            .with_expression_attribute_names(HashMap::new())
            .will_return(views(1));

        let counter = OrderCounter::new(client, "orders");
        let err = counter.bump_views("1", 1).unwrap_err();
        let mock_err = err.downcast_ref::<MockError>().unwrap();
        assert_eq!(mock_err.field(), Some(MatchField::ExpressionAttributeNames));
    }

    #[test]
    fn test_should_report_unconsumed_expectations() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item().will_return(views(1));
        mock.expect_update_item().will_return(views(2));

        OrderCounter::new(client, "orders").bump_views("1", 1)?;
        let err = mock.expectations_were_met().unwrap_err();
        assert_eq!(err, MockError::UnconsumedExpectations { count: 1 });
        assert_eq!(err.to_string(), "1 update item expectation(s) were not met");
        Ok(())
    }

    #[test]
    fn test_should_work_behind_shared_client() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item().to_table("orders").will_return(views(4));

        let counter = OrderCounter::new(Arc::new(client), "orders");
        assert_eq!(counter.bump_views("1", 1)?, Some("4".to_owned()));
        Ok(())
    }

    #[test]
    fn test_should_match_request_decoded_from_wire() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item()
            .to_table("orders")
            .with_keys(order_key("1"))
            .with_expression_attribute_values(HashMap::from([(
                ":by".to_owned(),
                AttributeValue::n(1),
            )]))
            .will_return(views(8));

        let input: UpdateItemInput = serde_json::from_str(
            r##"{
                "TableName": "orders",
                "Key": {"pk": {"S": "ORDER#1"}},
                "UpdateExpression": "ADD #views :by",
                "ExpressionAttributeNames": {"#views": "views"},
                "ExpressionAttributeValues": {":by": {"N": "1"}}
            }"##,
        )?;
        let output = client.update_item(&input)?;
        assert_eq!(output, views(8));
        Ok(())
    }
}
