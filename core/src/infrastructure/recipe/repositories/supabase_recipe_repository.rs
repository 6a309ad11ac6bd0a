use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::{error, instrument};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{NewRecipe, Recipe},
            ports::RecipeRepository,
            value_objects::RecipeFilter,
        },
    },
    infrastructure::recipe::mappers::{InsertRecipeRow, RecipeRow},
};

/// `recipes` table behind a Supabase PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseRecipeRepository {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseRecipeRepository {
    pub fn new(base_url: String, api_key: String, table: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn read_rows(response: Response) -> Result<Vec<RecipeRow>, CoreError> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Document store error: {} - {}", status, error_text);
            return Err(CoreError::StorageError(format!(
                "Document store returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<Vec<RecipeRow>>().await.map_err(|e| {
            error!("Failed to parse document store response: {}", e);
            CoreError::StorageError(format!("Failed to parse document store response: {}", e))
        })
    }
}

impl RecipeRepository for SupabaseRecipeRepository {
    #[instrument(skip(self, recipe), fields(file_id = %recipe.file_id))]
    async fn insert(&self, recipe: NewRecipe) -> Result<Recipe, CoreError> {
        let row = InsertRecipeRow::from(recipe);

        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to insert recipe: {}", e);
                CoreError::StorageError(format!("Failed to insert recipe: {}", e))
            })?;

        Self::read_rows(response)
            .await?
            .into_iter()
            .next()
            .map(Recipe::from)
            .ok_or_else(|| CoreError::StorageError("Insert returned no rows".to_string()))
    }

    #[instrument(skip(self))]
    async fn fetch_recipes(&self, filter: RecipeFilter) -> Result<Vec<Recipe>, CoreError> {
        let mut query = vec![("select".to_string(), "*".to_string())];

        if let Some(id) = filter.id {
            query.push(("id".to_string(), format!("eq.{}", id)));
        }

        let response = self
            .request(Method::GET)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes: {}", e);
                CoreError::StorageError(format!("Failed to fetch recipes: {}", e))
            })?;

        let rows = Self::read_rows(response).await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path, query_param},
    };

    use super::*;

    fn repository(server: &MockServer) -> SupabaseRecipeRepository {
        SupabaseRecipeRepository::new(
            server.uri(),
            "service-key".to_string(),
            "recipes".to_string(),
        )
    }

    fn row(id: i64, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "file_id": "0b7c7c0e-8f39-4d5c-b8a1-3c3c1a9b2f10",
            "file_name": "fruit.png",
            "recipe_title": title,
            "recipe_description": "Fresh fruit salad",
            "recipe_ingredients": ["1 banana", "1 apple"],
            "recipe_making_time": "10 minutes",
            "recipe_instructions_to_make": ["Chop", "Mix"],
            "recipe_number_of_people_servings": "2",
            "created_at": "2024-11-02T09:15:00.123456+00:00"
        })
    }

    #[tokio::test]
    async fn test_insert_posts_row_and_returns_representation() {
        let server = MockServer::start().await;
        let file_id = Uuid::parse_str("0b7c7c0e-8f39-4d5c-b8a1-3c3c1a9b2f10").unwrap();

        Mock::given(method("POST"))
            .and(path("/rest/v1/recipes"))
            .and(header("apikey", "service-key"))
            .and(header("Authorization", "Bearer service-key"))
            .and(header("Prefer", "return=representation"))
            .and(body_json(json!({
                "file_id": file_id.to_string(),
                "file_name": "fruit.png",
                "recipe_title": "Fruit salad",
                "recipe_description": "Fresh fruit salad",
                "recipe_ingredients": ["1 banana", "1 apple"],
                "recipe_making_time": "10 minutes",
                "recipe_instructions_to_make": ["Chop", "Mix"],
                "recipe_number_of_people_servings": "2"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([row(7, "Fruit salad")])))
            .expect(1)
            .mount(&server)
            .await;

        let recipe = repository(&server)
            .insert(NewRecipe {
                file_id,
                file_name: "fruit.png".to_string(),
                title: "Fruit salad".to_string(),
                description: "Fresh fruit salad".to_string(),
                making_time: "10 minutes".to_string(),
                servings: "2".to_string(),
                ingredients: vec!["1 banana".to_string(), "1 apple".to_string()],
                instructions: vec!["Chop".to_string(), "Mix".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.title, "Fruit salad");
        assert_eq!(recipe.instructions, vec!["Chop", "Mix"]);
        assert!(recipe.created_at.is_some());
    }

    #[tokio::test]
    async fn test_insert_failure_is_storage_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"message":"null value"}"#),
            )
            .mount(&server)
            .await;

        let err = repository(&server)
            .insert(NewRecipe {
                file_id: Uuid::new_v4(),
                file_name: "fruit.png".to_string(),
                title: "t".to_string(),
                description: "d".to_string(),
                making_time: "m".to_string(),
                servings: "s".to_string(),
                ingredients: vec!["i".to_string()],
                instructions: vec!["s".to_string()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::StorageError(msg) if msg.contains("400")));
    }

    #[tokio::test]
    async fn test_fetch_recipes_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/recipes"))
            .and(query_param("select", "*"))
            .and(query_param("id", "eq.3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([row(3, "Crumble")])))
            .expect(1)
            .mount(&server)
            .await;

        let recipes = repository(&server)
            .fetch_recipes(RecipeFilter::by_id(3))
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, 3);
        assert_eq!(recipes[0].title, "Crumble");
    }

    #[tokio::test]
    async fn test_fetch_all_recipes_keeps_store_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/recipes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                row(9, "Pie"),
                row(2, "Soup"),
                row(5, "Salad")
            ])))
            .mount(&server)
            .await;

        let recipes = repository(&server)
            .fetch_recipes(RecipeFilter::default())
            .await
            .unwrap();

        let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("select=*"));
    }

    #[tokio::test]
    async fn test_fetch_recipes_malformed_rows() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .mount(&server)
            .await;

        let err = repository(&server)
            .fetch_recipes(RecipeFilter::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::StorageError(_)));
    }
}
