#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::declarations::{DeclaredLot, HoldingsDeclaration};
    use crate::errors::{CalculatorError, Error};
    use crate::fx::{FxError, FxService};
    use crate::portfolio::holdings::{HoldingView, SkipReason};
    use crate::portfolio::report::{PortfolioReportService, PortfolioReportServiceTrait};
    use crate::quotes::QuoteService;
    use crate::resolver::Market;
    use crate::settings::ReportSettings;
    use crate::testing::MockMarketDataProvider;

    fn lot(name: &str, purchase_price: Decimal, amount: u64) -> DeclaredLot {
        DeclaredLot {
            name: name.to_string(),
            purchase_price,
            amount,
        }
    }

    fn declaration(lots: Vec<DeclaredLot>) -> HoldingsDeclaration {
        HoldingsDeclaration {
            lots,
            tickers: HashMap::from([
                ("Samsung".to_string(), "005930.KS".to_string()),
                ("Apple".to_string(), "AAPL".to_string()),
                ("Nvidia".to_string(), "NVDA".to_string()),
            ]),
        }
    }

    fn base_provider() -> MockMarketDataProvider {
        MockMarketDataProvider::new()
            .with_history("005930.KS", &[Some(dec!(110)), Some(dec!(115)), Some(dec!(120))])
            .with_history("AAPL", &[Some(dec!(11)), Some(dec!(11.5)), Some(dec!(12))])
            .with_latest("USDKRW=X", Some(dec!(1300)))
    }

    fn service(provider: MockMarketDataProvider) -> (PortfolioReportService, Arc<MockMarketDataProvider>) {
        let provider = Arc::new(provider);
        let settings = ReportSettings::default();
        let quote_service = Arc::new(QuoteService::new(provider.clone(), settings.lookback_days));
        let fx_service = Arc::new(FxService::new(
            provider.clone(),
            &settings.foreign_currency,
            &settings.reporting_currency,
        ));
        (
            PortfolioReportService::new(quote_service, fx_service, settings),
            provider,
        )
    }

    #[tokio::test]
    async fn test_generate_values_both_markets() {
        let (service, _) = service(base_provider());
        let report = service
            .generate(&declaration(vec![
                lot("Samsung", dec!(100), 10),
                lot("Apple", dec!(10), 5),
            ]))
            .await
            .unwrap();

        assert_eq!(report.exchange_rate, dec!(1300));
        assert_eq!(report.reporting_currency, "KRW");
        assert!(report.skipped.is_empty());

        let domestic = report
            .section(HoldingView::Aggregated, Market::Domestic)
            .unwrap();
        assert_eq!(domestic.totals.total_cost, dec!(1000));
        assert_eq!(domestic.totals.total_value, dec!(1200));
        assert_eq!(domestic.totals.total_profit_loss, dec!(200));

        let foreign = report
            .section(HoldingView::Aggregated, Market::Foreign)
            .unwrap();
        assert_eq!(foreign.totals.total_cost, dec!(65000));
        assert_eq!(foreign.totals.total_value, dec!(78000));
        assert_eq!(foreign.totals.total_profit_loss, dec!(13000));
        assert_eq!(foreign.rows[0].previous_price, dec!(11.5));
    }

    #[tokio::test]
    async fn test_sections_ordered_by_view_then_market() {
        let (service, _) = service(base_provider());
        let report = service
            .generate(&declaration(vec![lot("Apple", dec!(10), 5)]))
            .await
            .unwrap();

        let order: Vec<(HoldingView, Market)> =
            report.sections.iter().map(|s| (s.view, s.market)).collect();
        assert_eq!(
            order,
            vec![
                (HoldingView::Aggregated, Market::Domestic),
                (HoldingView::Aggregated, Market::Foreign),
                (HoldingView::PerLot, Market::Domestic),
                (HoldingView::PerLot, Market::Foreign),
            ]
        );
    }

    #[tokio::test]
    async fn test_totals_are_separate_per_view() {
        let (service, _) = service(base_provider());
        let report = service
            .generate(&declaration(vec![
                lot("Samsung", dec!(100), 4),
                lot("Samsung", dec!(90), 6),
            ]))
            .await
            .unwrap();

        let aggregated = report
            .section(HoldingView::Aggregated, Market::Domestic)
            .unwrap();
        let per_lot = report.section(HoldingView::PerLot, Market::Domestic).unwrap();

        assert_eq!(aggregated.rows.len(), 1);
        assert_eq!(per_lot.rows.len(), 2);
        assert_eq!(aggregated.totals.total_cost, dec!(940));
        assert_eq!(per_lot.totals.total_cost, dec!(940));
        assert_eq!(aggregated.totals.total_value, per_lot.totals.total_value);
    }

    #[tokio::test]
    async fn test_unknown_name_is_skipped_and_not_fetched() {
        let (service, provider) = service(base_provider());
        let report = service
            .generate(&declaration(vec![
                lot("Apple", dec!(10), 5),
                lot("Tesla", dec!(200), 1),
                lot("Apple", dec!(12), 5),
            ]))
            .await
            .unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].display_name, "Tesla");
        assert_eq!(report.skipped[0].reason, SkipReason::UnknownName);
        assert_eq!(provider.history_calls(), vec!["AAPL"]);

        let foreign = report
            .section(HoldingView::Aggregated, Market::Foreign)
            .unwrap();
        assert_eq!(foreign.totals.total_cost, dec!(143000));
        assert!(report
            .section(HoldingView::Aggregated, Market::Domestic)
            .unwrap()
            .rows
            .is_empty());
    }

    #[tokio::test]
    async fn test_exhausted_lookup_skips_holding() {
        let provider = base_provider().with_history(
            "NVDA",
            &[Some(dec!(900)), None, None, None],
        );
        let (service, _) = service(provider);
        let report = service
            .generate(&declaration(vec![
                lot("Nvidia", dec!(850), 2),
                lot("Apple", dec!(10), 5),
            ]))
            .await
            .unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            &report.skipped[0].reason,
            SkipReason::PriceUnavailable { identifier, .. } if identifier == "NVDA"
        ));
        for view in [HoldingView::Aggregated, HoldingView::PerLot] {
            let foreign = report.section(view, Market::Foreign).unwrap();
            assert_eq!(foreign.rows.len(), 1);
            assert_eq!(foreign.rows[0].display_name, "Apple");
        }
    }

    #[tokio::test]
    async fn test_history_failure_fails_the_run() {
        let (service, _) = service(base_provider().failing("AAPL"));
        let err = service
            .generate(&declaration(vec![lot("Apple", dec!(10), 5)]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MarketData(_)));
    }

    #[tokio::test]
    async fn test_missing_exchange_rate_fails_the_run() {
        let provider = MockMarketDataProvider::new()
            .with_history("AAPL", &[Some(dec!(11)), Some(dec!(12))]);
        let (service, _) = service(provider);
        let err = service
            .generate(&declaration(vec![lot("Apple", dec!(10), 5)]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Fx(FxError::FetchError(_))));
    }

    #[tokio::test]
    async fn test_zero_quantity_fails_the_run() {
        let (service, _) = service(base_provider());
        let err = service
            .generate(&declaration(vec![lot("Samsung", dec!(100), 0)]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::ZeroQuantity { ref display_name })
                if display_name == "Samsung"
        ));
    }

    #[tokio::test]
    async fn test_invalid_settings_fail_before_fetching() {
        let provider = Arc::new(base_provider());
        let settings = ReportSettings {
            foreign_currency: "KRW".to_string(),
            ..ReportSettings::default()
        };
        let service = PortfolioReportService::new(
            Arc::new(QuoteService::new(provider.clone(), settings.lookback_days)),
            Arc::new(FxService::new(provider.clone(), "USD", "KRW")),
            settings,
        );

        let result = service
            .generate(&declaration(vec![lot("Apple", dec!(10), 5)]))
            .await;

        assert!(result.is_err());
        assert!(provider.history_calls().is_empty());
    }
}
