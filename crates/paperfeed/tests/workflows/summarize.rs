use std::fs;

use super::*;

#[tokio::test]
async fn test_fetch_then_summarize() -> TestResult<()> {
  let (url, server) = serve_once("200 OK", CS_AI_FEED);
  let (config, _dir) = test_config(&url);

  pipeline::fetch(&config).await?;
  server.join().unwrap();

  let report = pipeline::summarize(&config, DEFAULT_MAX_SENTENCES)?;
  assert_eq!(report.generated, 3);
  assert_eq!(report.placeholders, 0);

  let collection = store::load_papers(&config.data_path)?;
  assert_eq!(
    collection.papers[0].key_findings,
    "Despite extensive pre-training in moral alignment to prevent generating harmful \
     information, large language models (LLMs) remain vulnerable to jailbreak attacks. In this \
     paper, we propose AutoDefense, a multi-agent defense framework that filters harmful \
     responses from LLMs. Does it generalize."
  );
  assert_eq!(
    collection.papers[1].key_findings,
    "We study the problem of exploration in safe reinforcement learning."
  );
  assert_eq!(
    collection.papers[2].key_findings,
    "In this paper, we explore the capability of an agent to construct a logical sequence of \
     action steps. We name it KEPP. Results are reported on three datasets."
  );
  Ok(())
}

#[test]
fn test_summarize_preserves_existing_findings() -> TestResult<()> {
  let dir = tempdir()?;
  let config = Config::default().with_data_path(dir.path().join("arxiv_papers.yml"));
  fs::write(
    &config.data_path,
    "papers:\n- id: '2301.00001'\n  title: Kept\n  authors: A\n  abstract: New text. More.\n  \
     published: '2023-01-01'\n  pdf_url: http://arxiv.org/pdf/2301.00001\n  arxiv_url: \
     http://arxiv.org/abs/2301.00001\n  key_findings: Curated by hand.\n- id: '2301.00002'\n  \
     title: Fresh\n  authors: B\n  abstract: ''\n  published: '2023-01-02'\n  pdf_url: \
     http://arxiv.org/pdf/2301.00002\n  arxiv_url: http://arxiv.org/abs/2301.00002\n  \
     key_findings: ''\n",
  )?;

  let report = pipeline::summarize(&config, DEFAULT_MAX_SENTENCES)?;
  assert_eq!(report.unchanged, 1);
  assert_eq!(report.placeholders, 1);

  let collection = store::load_papers(&config.data_path)?;
  assert_eq!(collection.papers[0].key_findings, "Curated by hand.");
  assert_eq!(collection.papers[1].key_findings, "Abstract not available.");
  Ok(())
}

#[test]
fn test_summarize_rejects_document_without_papers() -> TestResult<()> {
  let dir = tempdir()?;
  let config = Config::default().with_data_path(dir.path().join("arxiv_papers.yml"));
  fs::write(&config.data_path, "generated: 2024-03-08\n")?;

  let result = pipeline::summarize(&config, DEFAULT_MAX_SENTENCES);

  assert!(matches!(result, Err(PaperfeedError::MissingPapers(_))));
  assert_eq!(fs::read_to_string(&config.data_path)?, "generated: 2024-03-08\n");
  Ok(())
}
