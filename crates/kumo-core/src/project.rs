use crate::error::{Error, Result};
use crate::settings::CloudSettings;
use serde::{Deserialize, Serialize};

/// Listing entry returned by the project storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub id: String,
    pub name: String,
    pub app: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The persisted project payload: exactly the serialized form of the raw
/// input text, raw stopword text and settings. Save/load must round-trip
/// this losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub text: String,
    pub stopwords_text: String,
    pub settings: CloudSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    pub name: String,
    pub app: String,
    pub data: ProjectData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: ProjectData,
}

/// Project storage collaborator boundary.
///
/// Implementations own transport and authentication; the engine only depends
/// on this contract. `Error::AuthRequired` signals a missing session token,
/// `Error::StorageFailure` wraps any backend failure. The core never retries.
pub trait ProjectStore {
    fn list(&self, app: &str) -> Result<Vec<ProjectMeta>>;
    fn create(&mut self, payload: CreateProjectPayload) -> Result<ProjectMeta>;
    fn get(&self, id: &str) -> Result<ProjectData>;
    fn update(&mut self, id: &str, payload: UpdateProjectPayload) -> Result<ProjectMeta>;
    fn delete(&mut self, id: &str) -> Result<()>;
    fn thumbnail(&self, id: &str) -> Result<Vec<u8>>;
}

/// In-memory store used by tests and local tooling.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    next_id: u64,
    projects: Vec<(ProjectMeta, ProjectData, Option<Vec<u8>>)>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_thumbnail(&mut self, id: &str, bytes: Vec<u8>) -> Result<()> {
        let slot = self
            .projects
            .iter_mut()
            .find(|(meta, _, _)| meta.id == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?;
        slot.2 = Some(bytes);
        Ok(())
    }
}

impl ProjectStore for MemoryProjectStore {
    fn list(&self, app: &str) -> Result<Vec<ProjectMeta>> {
        Ok(self
            .projects
            .iter()
            .filter(|(meta, _, _)| meta.app == app)
            .map(|(meta, _, _)| meta.clone())
            .collect())
    }

    fn create(&mut self, payload: CreateProjectPayload) -> Result<ProjectMeta> {
        self.next_id += 1;
        let meta = ProjectMeta {
            id: format!("p{}", self.next_id),
            name: payload.name,
            app: payload.app,
            updated_at: chrono::Utc::now(),
        };
        self.projects.push((meta.clone(), payload.data, None));
        Ok(meta)
    }

    fn get(&self, id: &str) -> Result<ProjectData> {
        self.projects
            .iter()
            .find(|(meta, _, _)| meta.id == id)
            .map(|(_, data, _)| data.clone())
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    fn update(&mut self, id: &str, payload: UpdateProjectPayload) -> Result<ProjectMeta> {
        let slot = self
            .projects
            .iter_mut()
            .find(|(meta, _, _)| meta.id == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?;
        if let Some(name) = payload.name {
            slot.0.name = name;
        }
        slot.0.updated_at = chrono::Utc::now();
        slot.1 = payload.data;
        Ok(slot.0.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.projects.len();
        self.projects.retain(|(meta, _, _)| meta.id != id);
        if self.projects.len() == before {
            return Err(Error::NotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn thumbnail(&self, id: &str) -> Result<Vec<u8>> {
        self.projects
            .iter()
            .find(|(meta, _, _)| meta.id == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })?
            .2
            .clone()
            .ok_or_else(|| Error::StorageFailure {
                message: format!("no thumbnail stored for {id}"),
            })
    }
}
