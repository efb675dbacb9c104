//! Tests for the billing module

#[cfg(test)]
mod tests {
    use super::super::plans::*;

    fn catalog() -> PlanCatalog {
        PlanCatalog {
            pro_monthly: Plan {
                name: "Pro".to_string(),
                plan_id: 1,
                price_in_usd: 29,
                compare_at_price: Some(39),
                price_id: "price_monthly_test".to_string(),
                has_trial: true,
            },
            pro_yearly: Plan {
                name: "Pro Yearly".to_string(),
                plan_id: 2,
                price_in_usd: 290,
                compare_at_price: Some(468),
                price_id: "price_yearly_test".to_string(),
                has_trial: true,
            },
        }
    }

    #[test]
    fn test_find_plan_by_price_id() {
        let catalog = catalog();
        let plan = catalog.find_plan("price_yearly_test").unwrap();
        assert_eq!(plan.name, "Pro Yearly");
        assert_eq!(plan.plan_id, 2);
    }

    #[test]
    fn test_unknown_price_id_finds_nothing() {
        let catalog = catalog();
        assert!(catalog.find_plan("price_unknown").is_none());
    }

    #[test]
    fn test_catalog_lists_both_plans() {
        let catalog = catalog();
        let all = catalog.all();
        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|p| p.price_id == "price_monthly_test"));
    }
}
