//! Portal adapter and resolver routing against a mock HTTP server.

use citation_sources::{
    CrossrefClient, ElibraryClient, FetchError, HttpSettings, MetadataResolver, MetadataSource,
    RetryPolicy, SourceError, SourceQuery,
};
use gost_citation::{render, Author, FixedClock, ResourceType};
use chrono::NaiveDate;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
<meta name="DC.Creator" content="Иванов, И.И.; Петров, П.П.">
<meta name="DC.Title" content="Исследование свойств">
<meta name="DC.Source" content="Вестник науки">
<meta name="DC.Date" content="2019">
<meta name="DC.Identifier" content="https://doi.org/10.1000/abc">
</head>
<body></body>
</html>"#;

fn settings() -> HttpSettings {
    HttpSettings::default().with_retry(RetryPolicy::none())
}

/// **Test: Dublin Core headers map to a journal article**
#[tokio::test]
async fn test_fetch_metadata_by_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/item.asp")
        .match_query(mockito::Matcher::UrlEncoded("id".into(), "42".into()))
        .match_header("user-agent", mockito::Matcher::Regex("^Mozilla/5.0".into()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(PAGE)
        .create_async()
        .await;

    let client = ElibraryClient::new(&settings()).unwrap();
    let url = format!("{}/item.asp?id=42", server.url());
    let meta = client.fetch_metadata_by_url(&url).await.unwrap();

    mock.assert_async().await;
    assert_eq!(meta.resource_type, ResourceType::JournalArticle);
    assert_eq!(
        meta.authors,
        vec![Author::new("Иванов", "И И"), Author::new("Петров", "П П")]
    );
    assert_eq!(meta.main_title(), "Исследование свойств");
    assert_eq!(meta.container(), "Вестник науки");
    assert_eq!(meta.issued_year, Some(2019));
    assert_eq!(meta.url.as_deref(), Some("https://doi.org/10.1000/abc"));

    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(
        render(&meta, &clock),
        "Иванов И.И., Петров П.П. Исследование свойств // Вестник науки. – 2019. – DOI: https://doi.org/10.1000/abc"
    );
}

/// **Test: Non-200 page is an error carrying the status**
#[tokio::test]
async fn test_forbidden_page() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/item.asp")
        .match_query(mockito::Matcher::Any)
        .with_status(403)
        .create_async()
        .await;

    let client = ElibraryClient::new(&settings()).unwrap();
    let err = client
        .fetch_metadata_by_url(&format!("{}/item.asp?id=1", server.url()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Status(403));
    assert_eq!(err.user_message(), "Страница eLibrary не доступна (status=403)");
}

/// **Test: Non-http URL is rejected**
#[tokio::test]
async fn test_invalid_url() {
    let client = ElibraryClient::new(&settings()).unwrap();
    let err = client.fetch_metadata_by_url("ftp://elibrary.ru/1").await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}

/// **Test: Resolver routes each query kind to its adapter**
#[tokio::test]
async fn test_resolver_routing() {
    let mut server = mockito::Server::new_async().await;
    let doi_mock = server
        .mock("GET", "/works/10.1000/xyz")
        .with_status(200)
        .with_body(r#"{"message": {"type": "book", "title": ["A Book"]}}"#)
        .create_async()
        .await;
    let page_mock = server
        .mock("GET", "/page")
        .with_status(200)
        .with_body(PAGE)
        .create_async()
        .await;

    let resolver = MetadataResolver::from_clients(
        CrossrefClient::new(server.url(), &settings()).unwrap(),
        ElibraryClient::new(&settings()).unwrap(),
    );

    let book = resolver
        .resolve(&SourceQuery::classify("10.1000/xyz"))
        .await
        .unwrap();
    assert_eq!(book.resource_type, ResourceType::Book);

    let page_url = format!("{}/page", server.url());
    let article = resolver
        .resolve(&SourceQuery::classify(&page_url))
        .await
        .unwrap();
    assert_eq!(article.resource_type, ResourceType::JournalArticle);

    let err = resolver
        .resolve(&SourceQuery::classify("hello"))
        .await
        .unwrap_err();
    assert_eq!(err, SourceError::Unrecognized("hello".to_string()));

    doi_mock.assert_async().await;
    page_mock.assert_async().await;
}
