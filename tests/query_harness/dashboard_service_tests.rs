//! Macro-generated test suite for `DashboardService` contract validation.
//!
//! The `dashboard_service_tests!` macro generates a test module that
//! validates any `DashboardService` implementation loaded with the fixture
//! snapshot against the full query contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod query_harness;
//!
//! use query_harness::*;
//! use dashboard::storage::InMemoryDashboardService;
//!
//! dashboard_service_tests!(InMemoryDashboardService::new(fixture_snapshot()));
//! ```
//!
//! # Generated Tests
//!
//! ## Revenue & cards
//! - `test_revenue_verbatim`: revenue list equals the snapshot's
//! - `test_card_data`: counters and formatted totals
//! - `test_card_totals_bounded_by_sum`: paid + pending ≤ all amounts
//!
//! ## Invoices
//! - `test_latest_invoices`: at most 5, newest first, joined
//! - `test_filtered_invoices_pages`: page sizes and snapshot order
//! - `test_empty_query_is_unfiltered`: empty search returns everything
//! - `test_pages_match_count`: pages = ceil(matches / 6) for sample queries
//! - `test_dangling_customer`: unknown customer leaves joined fields empty
//! - `test_invoice_by_id`: known id in dollars (numeric ids too), unknown id fails
//!
//! ## Customers
//! - `test_customers_sorted`: `{id, name}` ordered by locale comparison,
//!   accented names included
//! - `test_filtered_customers`: per-customer counts and totals

/// Generate a full `DashboardService` conformance test suite.
///
/// `$factory` must be an expression that evaluates to a service loaded with
/// [`fixture_snapshot`](super::fixture_snapshot). It is re-evaluated for each
/// test to ensure isolation.
#[macro_export]
macro_rules! dashboard_service_tests {
    ($factory:expr) => {
        mod dashboard_service_contract_tests {
            use super::*;
            use dashboard::core::error::Operation;
            use dashboard::core::query::{ITEMS_PER_PAGE, locale_cmp};
            use dashboard::core::service::DashboardService;
            use std::cmp::Ordering;

            // ==================================================================
            // Revenue & cards
            // ==================================================================

            #[tokio::test]
            async fn test_revenue_verbatim() {
                let service = $factory;
                let revenue = service.fetch_revenue().await.unwrap();
                assert_eq!(revenue, fixture_snapshot().revenue);
                assert_eq!(revenue.len(), 12);
                assert_eq!(revenue[11].month, "Dec");
            }

            #[tokio::test]
            async fn test_card_data() {
                let service = $factory;
                let card = service.fetch_card_data().await.unwrap();

                assert_eq!(card.number_of_customers, 8);
                assert_eq!(card.number_of_invoices, 16);
                assert_eq!(card.total_paid_invoices, "$1,048.26");
                assert_eq!(card.total_pending_invoices, "$1,277.32");
            }

            #[tokio::test]
            async fn test_card_totals_bounded_by_sum() {
                let snapshot = fixture_snapshot();
                let totals =
                    dashboard::core::model::StatusTotals::collect(&snapshot.invoices).unwrap();
                let all: i64 = snapshot.invoices.iter().map(|i| i.amount).sum();

                // The "overdue" invoice is neither paid nor pending
                assert!(totals.paid + totals.pending < all);
                assert_eq!(all - totals.paid - totals.pending, 7777);
            }

            // ==================================================================
            // Invoices
            // ==================================================================

            #[tokio::test]
            async fn test_latest_invoices() {
                let service = $factory;
                let latest = service.fetch_latest_invoices().await.unwrap();

                assert!(latest.len() <= 5);
                let ids: Vec<&str> = latest.iter().map(|i| i.id.as_str()).collect();
                assert_eq!(ids, vec!["i04", "i11", "i05", "i06", "i07"]);
                assert!(latest.windows(2).all(|w| w[0].date >= w[1].date));

                assert_eq!(latest[0].amount, "$448.00");
                assert_eq!(latest[0].customer.name.as_deref(), Some("Lee Robinson"));
                assert_eq!(latest[0].customer.email.as_deref(), Some("lee@robinson.com"));
                assert_eq!(
                    latest[0].customer.image_url.as_deref(),
                    Some("/customers/lee-robinson.png")
                );
            }

            #[tokio::test]
            async fn test_filtered_invoices_pages() {
                let service = $factory;

                let page1 = service.fetch_filtered_invoices("", 1).await.unwrap();
                let page2 = service.fetch_filtered_invoices("", 2).await.unwrap();
                let page3 = service.fetch_filtered_invoices("", 3).await.unwrap();
                let page4 = service.fetch_filtered_invoices("", 4).await.unwrap();

                assert_eq!(page1.len(), ITEMS_PER_PAGE);
                assert_eq!(page2.len(), ITEMS_PER_PAGE);
                assert_eq!(page3.len(), 4);
                assert!(page4.is_empty());

                // Snapshot order, not date order
                let ids: Vec<&str> = page1.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["i01", "i02", "i03", "i04", "i05", "i06"]);
                assert_eq!(page3[2].id, "i15");
                // Numeric ids in the snapshot come back as strings
                assert_eq!(page3[3].id, "16");
                assert_eq!(page3[3].customer_id, "8");
                assert_eq!(page3[3].customer.name.as_deref(), Some("Émile Zola"));
                assert_eq!(page1[0].amount, 15795);
            }

            #[tokio::test]
            async fn test_search_filters_in_snapshot_order() {
                let service = $factory;

                let rows = service.fetch_filtered_invoices("lee", 1).await.unwrap();
                let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["i04", "i09", "i13"]);

                let paid_page2 = service.fetch_filtered_invoices("paid", 2).await.unwrap();
                assert_eq!(paid_page2.len(), 3);
                assert_eq!(service.fetch_invoices_pages("paid").await.unwrap(), 2);

                let june = service.fetch_filtered_invoices("2023-06", 1).await.unwrap();
                assert_eq!(june.len(), 5);

                let none = service.fetch_filtered_invoices("zzz", 1).await.unwrap();
                assert!(none.is_empty());
                assert_eq!(service.fetch_invoices_pages("zzz").await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_empty_query_is_unfiltered() {
                let service = $factory;
                let snapshot = fixture_snapshot();

                let mut all = Vec::new();
                for page in 1..=service.fetch_invoices_pages("").await.unwrap() {
                    all.extend(service.fetch_filtered_invoices("", page).await.unwrap());
                }
                let ids: Vec<String> = all.into_iter().map(|r| r.id).collect();
                let expected: Vec<String> =
                    snapshot.invoices.iter().map(|i| i.id.clone()).collect();
                assert_eq!(ids, expected);

                let customers = service.fetch_filtered_customers("").await.unwrap();
                assert_eq!(customers.len(), snapshot.customers.len());
            }

            #[tokio::test]
            async fn test_pages_match_count() {
                let service = $factory;
                let snapshot = fixture_snapshot();

                for query in SAMPLE_QUERIES {
                    let matches = expected_matches(&snapshot, query);
                    let pages = service.fetch_invoices_pages(query).await.unwrap();
                    assert_eq!(
                        pages,
                        matches.len().div_ceil(ITEMS_PER_PAGE),
                        "page count for query {:?}",
                        query
                    );

                    let first = service.fetch_filtered_invoices(query, 1).await.unwrap();
                    let first_ids: Vec<String> = first.into_iter().map(|r| r.id).collect();
                    let expected: Vec<String> =
                        matches.into_iter().take(ITEMS_PER_PAGE).collect();
                    assert_eq!(first_ids, expected, "first page for query {:?}", query);
                }
            }

            #[tokio::test]
            async fn test_dangling_customer() {
                let service = $factory;

                let rows = service.fetch_filtered_invoices("4200", 1).await.unwrap();
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].id, "i14");
                assert_eq!(rows[0].customer_id, "ghost");
                assert!(rows[0].customer.name.is_none());
                assert!(rows[0].customer.email.is_none());
                assert!(rows[0].customer.image_url.is_none());
            }

            #[tokio::test]
            async fn test_invoice_by_id() {
                let service = $factory;

                let form = service.fetch_invoice_by_id("i04").await.unwrap();
                assert!((form.amount - 448.0).abs() < f64::EPSILON);
                assert_eq!(form.customer_id, "c3");
                assert_eq!(form.status.as_str(), "paid");

                let numeric = service.fetch_invoice_by_id("16").await.unwrap();
                assert!((numeric.amount - 21.0).abs() < f64::EPSILON);
                assert_eq!(numeric.customer_id, "8");

                let err = service.fetch_invoice_by_id("missing").await.unwrap_err();
                assert_eq!(err.operation(), Some(Operation::Invoice));
                assert_eq!(err.to_string(), "Failed to fetch invoice.");
            }

            // ==================================================================
            // Customers
            // ==================================================================

            #[tokio::test]
            async fn test_customers_sorted() {
                let service = $factory;
                let customers = service.fetch_customers().await.unwrap();

                let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(
                    names,
                    vec![
                        "Amy Burns",
                        "Balazs Orban",
                        "Delba de Oliveira",
                        "Émile Zola",
                        "Evil Rabbit",
                        "Lee Robinson",
                        "Michael Novotny",
                        "steph dietz",
                    ]
                );
                assert!(
                    customers
                        .windows(2)
                        .all(|w| locale_cmp(&w[0].name, &w[1].name) == Ordering::Less)
                );
                assert_eq!(customers[0].id, "c5");
            }

            #[tokio::test]
            async fn test_filtered_customers() {
                let service = $factory;

                let lee = service.fetch_filtered_customers("ROBINSON").await.unwrap();
                assert_eq!(lee.len(), 1);
                assert_eq!(lee[0].email, "lee@robinson.com");
                assert_eq!(lee[0].total_invoices, 3);
                assert_eq!(lee[0].total_paid, "$470.50");
                assert_eq!(lee[0].total_pending, "$0.00");

                let all = service.fetch_filtered_customers("").await.unwrap();
                let balazs = all.iter().find(|c| c.id == "c6").unwrap();
                assert_eq!(balazs.total_invoices, 2);
                assert_eq!(balazs.total_pending, "$542.46");
                assert_eq!(balazs.total_paid, "$0.00");

                let steph = all.iter().find(|c| c.id == "c7").unwrap();
                assert_eq!(steph.total_invoices, 0);
                assert_eq!(all.last().map(|c| c.name.as_str()), Some("steph dietz"));

                // Accented names sort by their base letters and match case-insensitively
                let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names[3], "Émile Zola");
                let emile = service.fetch_filtered_customers("ÉMILE").await.unwrap();
                assert_eq!(emile.len(), 1);
                assert_eq!(emile[0].id, "8");
                assert_eq!(emile[0].total_invoices, 1);
                assert_eq!(emile[0].total_pending, "$21.00");
                assert_eq!(emile[0].total_paid, "$0.00");

                let amy = service.fetch_filtered_customers("amy").await.unwrap();
                assert_eq!(amy.len(), 1);
                assert!(service.fetch_filtered_customers("zzz").await.unwrap().is_empty());
            }
        }
    };
}
