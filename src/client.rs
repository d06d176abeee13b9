//! Typed HTTP client for the demo routes.
//!
//! Used by `bluebot-cli` and the integration tests.

use reqwest::{Client, Response};
use serde_json::json;

/// Which add endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Species {
    Cat,
    Dog,
    Hamster,
}

impl Species {
    /// Path of the matching `POST` route.
    pub fn path(self) -> &'static str {
        match self {
            Species::Cat => "/cats/",
            Species::Dog => "/dogs/",
            Species::Hamster => "/hamsters/",
        }
    }
}

/// Response format for `GET /cats/{data}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatFormat {
    #[value(name = "string")]
    Text,
    Json,
}

impl CatFormat {
    fn segment(self) -> &'static str {
        match self {
            CatFormat::Text => "string",
            CatFormat::Json => "json",
        }
    }
}

/// Status and body of a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub server: Option<String>,
    pub body: String,
}

impl Reply {
    async fn read(response: Response) -> Result<Self, reqwest::Error> {
        let status = response.status().as_u16();
        let server = response
            .headers()
            .get(reqwest::header::SERVER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;
        Ok(Self { status, server, body })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct BlueBotClient {
    client: Client,
    base_url: String,
}

impl BlueBotClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /`
    pub async fn hello(&self) -> Result<Reply, reqwest::Error> {
        Reply::read(self.client.get(self.url("/")).send().await?).await
    }

    /// `GET /cats/{format}?name=&type=`
    pub async fn cat(&self, format: CatFormat, name: &str, kind: &str) -> Result<Reply, reqwest::Error> {
        let response = self
            .client
            .get(self.url(&format!("/cats/{}", format.segment())))
            .query(&[("name", name), ("type", kind)])
            .send()
            .await?;
        Reply::read(response).await
    }

    /// `POST /cats/`, `/dogs/` or `/hamsters/` with a JSON pet record.
    pub async fn add(&self, species: Species, name: &str, kind: &str) -> Result<Reply, reqwest::Error> {
        let response = self
            .client
            .post(self.url(species.path()))
            .json(&json!({ "name": name, "type": kind }))
            .send()
            .await?;
        Reply::read(response).await
    }

    /// `GET /admin/main`, with Basic credentials when a user is given.
    pub async fn admin(&self, user: Option<&str>, password: Option<&str>) -> Result<Reply, reqwest::Error> {
        let mut request = self.client.get(self.url("/admin/main"));
        if let Some(user) = user {
            request = request.basic_auth(user, password);
        }
        Reply::read(request.send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_paths() {
        assert_eq!(Species::Cat.path(), "/cats/");
        assert_eq!(Species::Dog.path(), "/dogs/");
        assert_eq!(Species::Hamster.path(), "/hamsters/");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = BlueBotClient::new("http://localhost:3000/");
        assert_eq!(client.url("/"), "http://localhost:3000/");
        assert_eq!(client.url("/dogs/"), "http://localhost:3000/dogs/");
    }
}
