use serde_json::json;
use storefront_catalog::catalog::RankedView;
use storefront_catalog::model::{Locale, ProductId};
use storefront_catalog::pages::PageKind;
use storefront_catalog::runtime::{Storefront, StorefrontConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IMAGE_BASE: &str = "https://cdn.shop.example.com";

fn storefront_for(server: &MockServer) -> Storefront {
    let config = StorefrontConfig {
        api_url: format!("{}/api", server.uri()),
        image_base_url: IMAGE_BASE.to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    Storefront::new(config).expect("Failed to build storefront")
}

fn catalog_body() -> serde_json::Value {
    json!({
        "success": true,
        "products": [
            {
                "id": 1,
                "name": "Whey Protein",
                "nameAr": "بروتين",
                "price": 40,
                "oldPrice": 50,
                "sales_count": 10,
                "rating": 5,
                "image": "/uploads/whey.png",
                "flavor": "Chocolate, Vanilla",
                "createdAt": "2024-01-10T00:00:00Z"
            },
            {
                "id": 2,
                "name": "Mass Gainer",
                "sales_count": 10,
                "rating": 3,
                "image": "https://other.example.com/gainer.png",
                "createdAt": "2024-05-10T00:00:00Z"
            },
            {
                "id": 3,
                "name": "Creatine",
                "sales_count": 20,
                "rating": 5,
                "createdAt": "2023-11-01T00:00:00Z"
            },
            { "name": "Broken record without id", "sales_count": 99 },
            { "id": 4 }
        ]
    })
}

/// Full end-to-end test: HTTP fetch, normalization, ranking and page state.
#[tokio::test]
async fn test_home_page_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&server)
        .await;

    let storefront = storefront_for(&server);
    let page = storefront.page(PageKind::Home);
    let state = page.activate().await;

    assert!(state.error_message().is_none());

    let best: Vec<ProductId> = state
        .list(RankedView::BestSellers)
        .expect("best sellers missing")
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(
        best,
        vec![ProductId::from(3), ProductId::from(1), ProductId::from(2), ProductId::from(4)]
    );

    let recommended: Vec<String> = state
        .list(RankedView::Recommended)
        .unwrap()
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(recommended, vec!["3", "1"]);

    let latest: Vec<String> = state
        .list(RankedView::LatestAdditions)
        .unwrap()
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(latest, vec!["2", "1", "3", "4"]);

    let whey = &state.list(RankedView::Recommended).unwrap()[1];
    assert_eq!(whey.image, "https://cdn.shop.example.com/uploads/whey.png");
    assert_eq!(whey.flavor, vec!["Chocolate", "Vanilla"]);
    assert_eq!(whey.display_name(Locale::Arabic), "بروتين");
    assert_eq!(whey.discount_percent(), Some(20));

    let bare = &state.list(RankedView::BestSellers).unwrap()[3];
    assert_eq!(bare.image, "");
    assert_eq!(bare.sales_count, 0);
    assert_eq!(bare.rating, 0.0);
    assert!(bare.flavor.is_empty());
}

#[tokio::test]
async fn test_mistyped_record_does_not_blank_the_page() {
    let server = MockServer::start().await;
    let body = json!({
        "success": true,
        "products": [
            { "id": 1, "name": "Whey Protein", "sales_count": 10 },
            { "id": 2.5, "name": ["not", "a", "name"], "flavor": [null], "image": 42 },
            { "id": 3.0, "name": "Creatine", "sales_count": 20, "createdAt": 1_700_000_000_000.0 },
            17
        ]
    });
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let storefront = storefront_for(&server);
    let state = storefront.page(PageKind::BestSellers).activate().await;

    assert!(state.error_message().is_none());
    let best: Vec<String> = state
        .list(RankedView::BestSellers)
        .unwrap()
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(best, vec!["3", "1"]);
}

#[tokio::test]
async fn test_failed_fetch_then_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&server)
        .await;

    let storefront = storefront_for(&server);
    let page = storefront.page(PageKind::NewArrivals);

    let failed = page.activate().await;
    assert_eq!(
        failed.error_message(),
        Some(storefront.config().error_message.as_str())
    );
    assert!(failed.lists().is_empty());

    let recovered = page.retry().await;
    let arrivals = recovered.list(RankedView::NewArrivals).unwrap();
    assert_eq!(arrivals.len(), 4);
    assert_eq!(arrivals[0].id.to_string(), "2");
}

#[tokio::test]
async fn test_unreachable_api_sets_error_state() {
    // Nothing listens on the discard port.
    let config = StorefrontConfig {
        api_url: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let storefront = Storefront::new(config).unwrap();
    let state = storefront.page(PageKind::BestSellers).activate().await;

    assert!(state.error_message().is_some());
    assert!(state.lists().is_empty());
}
