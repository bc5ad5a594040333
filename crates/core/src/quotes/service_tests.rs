#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;
    use tickerbook_market_data::{MarketDataError, Quote};

    use crate::errors::Error;
    use crate::quotes::{QuoteService, QuoteServiceTrait};
    use crate::testing::{session_day, MockMarketDataProvider};

    #[tokio::test]
    async fn test_fetches_each_identifier_once() {
        let provider = Arc::new(
            MockMarketDataProvider::new()
                .with_history("005930.KS", &[Some(dec!(77000)), Some(dec!(78000))])
                .with_history("AAPL", &[Some(dec!(180)), Some(dec!(182))]),
        );
        let service = QuoteService::new(provider.clone(), 10);

        let series = service
            .fetch_price_series(&["005930.KS".to_string(), "AAPL".to_string()], session_day(2))
            .await
            .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series["AAPL"].closes(), &[Some(dec!(180)), Some(dec!(182))]);
        assert_eq!(provider.history_calls(), vec!["005930.KS", "AAPL"]);
    }

    #[tokio::test]
    async fn test_histories_are_session_aligned() {
        let provider = Arc::new(
            MockMarketDataProvider::new()
                .with_quotes(
                    "005930.KS",
                    vec![
                        Quote::new(session_day(0), Some(dec!(77000)), "MOCK"),
                        Quote::new(session_day(2), Some(dec!(78000)), "MOCK"),
                    ],
                )
                .with_history(
                    "AAPL",
                    &[Some(dec!(180)), Some(dec!(181)), Some(dec!(182))],
                ),
        );
        let service = QuoteService::new(provider, 10);

        let series = service
            .fetch_price_series(&["005930.KS".to_string(), "AAPL".to_string()], session_day(3))
            .await
            .unwrap();

        assert_eq!(
            series["005930.KS"].closes(),
            &[Some(dec!(77000)), None, Some(dec!(78000))]
        );
    }

    #[tokio::test]
    async fn test_provider_failure_fails_the_fetch() {
        let provider = Arc::new(
            MockMarketDataProvider::new()
                .with_history("AAPL", &[Some(dec!(180)), Some(dec!(182))])
                .failing("MSFT"),
        );
        let service = QuoteService::new(provider, 10);

        let result = service
            .fetch_price_series(&["AAPL".to_string(), "MSFT".to_string()], session_day(2))
            .await;

        assert!(matches!(
            result,
            Err(Error::MarketData(MarketDataError::ProviderError { .. }))
        ));
    }

    #[tokio::test]
    async fn test_empty_history_is_an_error() {
        let provider = Arc::new(MockMarketDataProvider::new().with_history("AAPL", &[]));
        let service = QuoteService::new(provider, 10);

        let result = service
            .fetch_price_series(&["AAPL".to_string()], session_day(2))
            .await;

        assert!(matches!(
            result,
            Err(Error::MarketData(MarketDataError::NoDataForRange(_)))
        ));
    }
}
