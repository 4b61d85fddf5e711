use std::{fs, time::Instant};

use super::*;

#[tokio::test]
async fn test_fetch_writes_every_entry() -> TestResult<()> {
  let (url, server) = serve_once("200 OK", CS_AI_FEED);
  let (config, _dir) = test_config(&url);

  let report = pipeline::fetch(&config.with_max_results(3)).await?;

  assert_eq!(report.fetched, 3);
  assert!(report.is_success());

  let collection = store::load_papers(&report.path)?;
  assert_eq!(collection.len(), 3);
  assert!(collection.papers.iter().all(|paper| paper.key_findings.is_empty()));

  let first = &collection.papers[0];
  assert_eq!(first.id, "2403.04783");
  assert_eq!(first.title, "AutoDefense: Multi-Agent LLM Defense against Jailbreak Attacks");
  assert_eq!(first.authors, "Yifan Zeng, Yiran Wu, Xiao Zhang");
  assert_eq!(first.published, "2024-03-07");
  assert_eq!(first.pdf_url, "http://arxiv.org/pdf/2403.04783");
  assert_eq!(first.arxiv_url, "http://arxiv.org/abs/2403.04783");
  assert!(first.abstract_text.starts_with("Despite extensive pre-training in moral alignment"));
  assert!(!first.abstract_text.contains('\n'));

  assert_eq!(collection.papers[1].id, "2403.04781");
  assert_eq!(
    collection.papers[2].title,
    "Why Not Use Your Textbook? Knowledge-Enhanced Procedure Planning of Instructional Videos"
  );

  server.join().unwrap();
  Ok(())
}

#[tokio::test]
async fn test_fetch_sends_listing_query() -> TestResult<()> {
  let (url, server) = serve_once("200 OK", CS_AI_FEED);
  let (config, _dir) = test_config(&url);

  pipeline::fetch(&config.with_category("cs.AI").with_max_results(3)).await?;

  let request_line = server.join().unwrap();
  assert!(request_line.starts_with("GET /api/query?"), "{request_line}");
  assert!(request_line.contains("search_query=cat%3Acs.AI"), "{request_line}");
  assert!(request_line.contains("sortBy=submittedDate"), "{request_line}");
  assert!(request_line.contains("sortOrder=descending"), "{request_line}");
  assert!(request_line.contains("max_results=3"), "{request_line}");
  Ok(())
}

#[tokio::test]
async fn test_fetch_empty_feed_writes_empty_list() -> TestResult<()> {
  let (url, server) = serve_once(
    "200 OK",
    r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>ArXiv Query</title></feed>"#,
  );
  let (config, _dir) = test_config(&url);

  let report = pipeline::fetch(&config).await?;

  assert_eq!(report.fetched, 0);
  assert!(!report.is_success());
  assert_eq!(fs::read_to_string(&report.path)?, "papers: []\n");

  server.join().unwrap();
  Ok(())
}

#[tokio::test]
async fn test_fetch_server_error_writes_empty_list() -> TestResult<()> {
  let (url, server) = serve_once("503 Service Unavailable", "Rate exceeded.");
  let (config, _dir) = test_config(&url);

  let report = pipeline::fetch(&config).await?;

  assert_eq!(report.fetched, 0);
  assert!(store::load_papers(&report.path)?.is_empty());

  server.join().unwrap();
  Ok(())
}

#[tokio::test]
async fn test_fetch_truncated_feed_writes_empty_list() -> TestResult<()> {
  let (url, server) =
    serve_once("200 OK", r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry><id>http://arxiv"#);
  let (config, _dir) = test_config(&url);

  let report = pipeline::fetch(&config).await?;

  assert_eq!(report.fetched, 0);
  assert!(store::load_papers(&report.path)?.is_empty());

  server.join().unwrap();
  Ok(())
}

#[tokio::test]
async fn test_fetch_replaces_previous_file() -> TestResult<()> {
  let (url, server) = serve_once("200 OK", CS_AI_FEED);
  let (config, _dir) = test_config(&url);
  fs::create_dir_all(config.data_path.parent().unwrap())?;
  fs::write(&config.data_path, "papers:\n- id: stale\n  key_findings: Old.\n")?;

  pipeline::fetch(&config).await?;

  let collection = store::load_papers(&config.data_path)?;
  assert_eq!(collection.len(), 3);
  assert!(collection.papers.iter().all(|paper| paper.id != "stale"));

  server.join().unwrap();
  Ok(())
}

#[tokio::test]
async fn test_courtesy_delay_after_success() -> TestResult<()> {
  let (url, server) = serve_once("200 OK", CS_AI_FEED);
  let (config, _dir) = test_config(&url);
  let client = ArxivClient::new(&config.with_request_delay(Duration::from_secs(1)))?;

  let start = Instant::now();
  let xml = client.fetch_papers("cs.AI", 3).await?;

  assert!(start.elapsed() >= Duration::from_secs(1));
  assert_eq!(xml, CS_AI_FEED);

  server.join().unwrap();
  Ok(())
}

#[tokio::test]
async fn test_no_courtesy_delay_after_failure() -> TestResult<()> {
  let (url, server) = serve_once("503 Service Unavailable", "Rate exceeded.");
  let (config, _dir) = test_config(&url);
  let client = ArxivClient::new(&config.with_request_delay(Duration::from_secs(2)))?;

  let start = Instant::now();
  let result = client.fetch_papers("cs.AI", 3).await;

  assert!(matches!(result, Err(PaperfeedError::Network(_))));
  assert!(start.elapsed() < Duration::from_secs(2));

  server.join().unwrap();
  Ok(())
}
