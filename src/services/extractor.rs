//! Subgraph extraction: one edge-list file per property.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::context::{AppConfig, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{EntityList, Property};
use crate::repositories::EdgeRepository;

/// File layout for one dataset: `<root>/<dataset>/graphs/<short>.edgelist`.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    graphs_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl AsRef<Path>, dataset: &str) -> Self {
        Self {
            graphs_dir: root.as_ref().join(dataset).join("graphs"),
        }
    }

    pub fn graphs_dir(&self) -> &Path {
        &self.graphs_dir
    }

    pub fn edge_list_path(&self, property: &Property) -> PathBuf {
        self.graphs_dir
            .join(format!("{}.edgelist", property.short_name()))
    }

    /// Creates the dataset and graphs directories.
    ///
    /// Directories that already exist are fine; every other failure
    /// (permissions, a file in the way) is returned.
    pub fn ensure(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.graphs_dir)?;
        Ok(())
    }
}

/// One written edge list.
#[derive(Debug, Clone)]
pub struct PropertyOutput {
    pub property: Property,
    pub path: PathBuf,
    pub edges: usize,
}

/// Summary of an extraction run, in property order.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub outputs: Vec<PropertyOutput>,
}

impl ExtractionReport {
    pub fn total_edges(&self) -> usize {
        self.outputs.iter().map(|o| o.edges).sum()
    }
}

/// Service writing the per-property subgraphs of a set of entities.
#[derive(FromContext, Clone)]
pub struct SubgraphExtractor {
    edge_repo: EdgeRepository,
    config: AppConfig,
}

impl SubgraphExtractor {
    /// Extracts every property into `<output.root>/<dataset>/graphs/`.
    pub async fn extract(
        &self,
        dataset: &str,
        properties: &[Property],
        entities: &EntityList,
    ) -> Result<ExtractionReport, AppError> {
        let layout = OutputLayout::new(&self.config.output.root, dataset);
        self.extract_into(&layout, properties, entities).await
    }

    /// Extracts every property into `layout`.
    ///
    /// The `feedback` property is skipped. Properties are processed in order
    /// and each file is completely written (truncating any previous content)
    /// before the next property starts.
    pub async fn extract_into(
        &self,
        layout: &OutputLayout,
        properties: &[Property],
        entities: &EntityList,
    ) -> Result<ExtractionReport, AppError> {
        let mut report = ExtractionReport::default();

        for property in properties.iter().filter(|p| !p.is_feedback()) {
            layout.ensure()?;
            let path = layout.edge_list_path(property);
            let edges = self.write_edge_list(&path, property, entities).await?;

            tracing::info!(
                property = %property,
                edges,
                path = %path.display(),
                "Wrote edge list"
            );
            report.outputs.push(PropertyOutput {
                property: property.clone(),
                path,
                edges,
            });
        }

        Ok(report)
    }

    async fn write_edge_list(
        &self,
        path: &Path,
        property: &Property,
        entities: &EntityList,
    ) -> Result<usize, AppError> {
        let mut writer = BufWriter::new(File::create(path)?);
        let mut written = 0;

        for entity in entities {
            let edges = self.edge_repo.edges(property, entity).await?;
            for edge in &edges {
                tracing::debug!(subject = %edge.subject, object = %edge.object, "Edge");
                writeln!(writer, "{edge}")?;
            }
            written += edges.len();
        }

        writer.flush()?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::di::FromRef;
    use crate::models::Entity;
    use crate::services::fake::{context, FakeEndpoint};
    use std::sync::Arc;

    const DIRECTOR: &str = "http://dbpedia.org/ontology/director";

    fn fake() -> Arc<FakeEndpoint> {
        Arc::new(
            FakeEndpoint::new()
                .edges(
                    "<http://dbpedia.org/ontology/director>",
                    "http://e/heat",
                    &["http://e/mann"],
                )
                .edges(
                    "<http://dbpedia.org/ontology/director>",
                    "http://e/alien",
                    &["http://e/scott"],
                )
                .edges("dct:subject", "http://e/heat", &["http://c/crime", "http://c/1995"]),
        )
    }

    fn entities() -> EntityList {
        ["http://e/heat", "http://e/alien"]
            .into_iter()
            .map(Entity::from)
            .collect()
    }

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.output.root = dir.to_path_buf();
        config
    }

    #[tokio::test]
    async fn test_extract_writes_one_file_per_property() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = fake();
        let extractor = SubgraphExtractor::from_ref(&context(&fake, config_in(tmp.path())));
        let properties = vec![Property::new(DIRECTOR), Property::new("dct:subject")];

        let report = extractor
            .extract("movies", &properties, &entities())
            .await
            .unwrap();

        let graphs = tmp.path().join("movies").join("graphs");
        assert_eq!(
            std::fs::read_to_string(graphs.join("director.edgelist")).unwrap(),
            "http://e/heat http://e/mann\nhttp://e/alien http://e/scott\n"
        );
        assert_eq!(
            std::fs::read_to_string(graphs.join("dct:subject.edgelist")).unwrap(),
            "http://e/heat http://c/crime\nhttp://e/heat http://c/1995\n"
        );
        assert_eq!(report.outputs.len(), 2);
        assert_eq!(report.total_edges(), 4);
    }

    #[tokio::test]
    async fn test_extract_queries_properties_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = fake();
        let extractor = SubgraphExtractor::from_ref(&context(&fake, config_in(tmp.path())));
        let properties = vec![Property::new(DIRECTOR), Property::new("dct:subject")];

        extractor
            .extract("movies", &properties, &entities())
            .await
            .unwrap();

        let queries = fake.queries();
        assert_eq!(queries.len(), 4);
        assert_eq!(
            queries[0],
            "SELECT ?s ?o WHERE {?s <http://dbpedia.org/ontology/director> ?o. FILTER (?s = <http://e/heat>)}"
        );
        assert!(queries[1].contains("<http://e/alien>"));
        assert_eq!(
            queries[2],
            "SELECT ?s ?o WHERE {?s dct:subject ?o. FILTER (?s = <http://e/heat>)}"
        );
    }

    #[tokio::test]
    async fn test_extract_skips_feedback() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = fake();
        let extractor = SubgraphExtractor::from_ref(&context(&fake, config_in(tmp.path())));
        let properties = vec![Property::new("feedback"), Property::new(DIRECTOR)];

        let report = extractor
            .extract("movies", &properties, &entities())
            .await
            .unwrap();

        let graphs = tmp.path().join("movies").join("graphs");
        assert!(!graphs.join("feedback.edgelist").exists());
        assert!(fake.queries().iter().all(|q| !q.contains("feedback")));
        assert_eq!(report.outputs.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_twice_truncates() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = fake();
        let extractor = SubgraphExtractor::from_ref(&context(&fake, config_in(tmp.path())));
        let properties = vec![Property::new(DIRECTOR)];
        let path = tmp
            .path()
            .join("movies")
            .join("graphs")
            .join("director.edgelist");

        extractor
            .extract("movies", &properties, &entities())
            .await
            .unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        extractor
            .extract("movies", &properties, &entities())
            .await
            .unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_extract_creates_empty_file_without_edges() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = Arc::new(FakeEndpoint::new());
        let extractor = SubgraphExtractor::from_ref(&context(&fake, config_in(tmp.path())));

        let report = extractor
            .extract("movies", &[Property::new("dbo:genre")], &entities())
            .await
            .unwrap();

        assert_eq!(report.total_edges(), 0);
        assert_eq!(std::fs::read_to_string(&report.outputs[0].path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_extract_fails_when_output_dir_is_blocked() {
        let tmp = tempfile::tempdir().unwrap();
        // A file where the dataset directory should go
        std::fs::write(tmp.path().join("movies"), "").unwrap();
        let fake = fake();
        let extractor = SubgraphExtractor::from_ref(&context(&fake, config_in(tmp.path())));

        let result = extractor
            .extract("movies", &[Property::new(DIRECTOR)], &entities())
            .await;

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(fake.queries().is_empty());
    }

    #[tokio::test]
    async fn test_extract_aborts_on_query_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let fake = Arc::new(FakeEndpoint::new().fail_when("dct:subject"));
        let extractor = SubgraphExtractor::from_ref(&context(&fake, config_in(tmp.path())));
        let properties = vec![Property::new(DIRECTOR), Property::new("dct:subject")];

        let result = extractor
            .extract("movies", &properties, &entities())
            .await;

        assert!(result.is_err());
        // The first property's file was finished before the failure
        assert!(tmp
            .path()
            .join("movies/graphs/director.edgelist")
            .exists());
    }

    #[test]
    fn test_layout_paths() {
        let layout = OutputLayout::new("datasets", "LibraryThing");
        assert_eq!(
            layout.edge_list_path(&Property::new("http://purl.org/dc/terms/subject")),
            PathBuf::from("datasets/LibraryThing/graphs/subject.edgelist")
        );
    }

    #[test]
    fn test_layout_ensure_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(tmp.path(), "movies");
        layout.ensure().unwrap();
        layout.ensure().unwrap();
        assert!(layout.graphs_dir().is_dir());
    }
}
