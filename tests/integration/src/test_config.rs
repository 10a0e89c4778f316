//! Matching modes selected through `MockConfig`.

#[cfg(test)]
mod tests {
    use dynamock_core::{CallContext, MatchField, MockConfig, MockError, UpdateItemApi};
    use dynamock_model::UpdateItemInput;

    use crate::{OrderCounter, mock, mock_with};

    fn call(update: &str) -> UpdateItemInput {
        UpdateItemInput {
            table_name: "t".to_owned(),
            update_expression: Some(update.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_should_compare_update_expression_exactly_by_default() {
        let (client, mock) = mock();
        mock.expect_update_item()
            .with_update_expression("ADD #c :one SET #s = :s")
            .register();

        let err = client.update_item(&call("SET #s = :s ADD #c :one")).unwrap_err();
        assert_eq!(err.field(), Some(MatchField::UpdateExpression));
        assert_eq!(
            err.to_string(),
            "Expect update expression ADD #c :one SET #s = :s but found update expression SET #s = :s ADD #c :one"
        );
    }

    #[test]
    fn test_should_compare_update_expression_structurally() -> anyhow::Result<()> {
        let (client, mock) = mock_with(MockConfig::default().structural());
        mock.expect_update_item()
            .with_update_expression("ADD #c :one SET #s = :s")
            .register();

        client.update_item(&call("SET #s=:s  ADD #c :one"))?;
        mock.expectations_were_met()?;
        Ok(())
    }

    #[test]
    fn test_should_check_set_fragment_structurally() -> anyhow::Result<()> {
        let (client, mock) = mock_with(MockConfig::default().structural());
        mock.expect_update_item()
            .with_set_attribute_value_expression("#status=:status")
            .register();
        mock.expect_update_item()
            .with_set_attribute_value_expression("#status = :other")
            .register();

        let counter = OrderCounter::new(client, "orders");
        counter.set_status(&CallContext::new(), "1", "paid")?;

        let err = counter
            .set_status(&CallContext::new(), "1", "paid")
            .unwrap_err();
        let mock_err = err.downcast_ref::<MockError>().unwrap();
        assert_eq!(mock_err.field(), Some(MatchField::SetAttributeValueExpression));
        Ok(())
    }

    #[test]
    fn test_should_ignore_set_fragment_in_exact_mode() -> anyhow::Result<()> {
        let (client, mock) = mock();
        mock.expect_update_item()
            .with_set_attribute_value_expression("#nothing = :like_this")
            .register();

        OrderCounter::new(client, "orders").set_status(&CallContext::new(), "1", "paid")?;
        Ok(())
    }

    #[test]
    fn test_should_reject_different_expressions_with_embedded_keyword() {
        let (client, mock) = mock_with(MockConfig::default().structural());
        mock.expect_update_item()
            .with_update_expression("SET ADDENDUM = :v")
            .register();
        let err = client.update_item(&call("SET ADDENDUM = :w")).unwrap_err();
        assert_eq!(err.field(), Some(MatchField::UpdateExpression));
        assert_eq!(mock.pending_update_items(), 1);
    }

    #[test]
    fn test_should_normalise_embedded_keyword_with_word_boundary_scan() -> anyhow::Result<()> {
        let (client, mock) = mock_with(MockConfig::default().structural().word_boundary());
        mock.expect_update_item()
            .with_update_expression("SET ADDENDUM = :v")
            .register();
        client.update_item(&call("SET  ADDENDUM=:v"))?;
        mock.expectations_were_met()?;
        Ok(())
    }
}
