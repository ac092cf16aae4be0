use crate::models::cart::Cart;
use crate::repositories::errors::cart_repository_errors::CartRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, to_attribute_value, to_item};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_cart(&self, user_id: &str) -> Result<Cart, CartRepositoryError>;
    async fn save_cart(&self, cart: &Cart) -> Result<(), CartRepositoryError>;
}

pub struct DynamoDbCartRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbCartRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl CartRepository for DynamoDbCartRepository {
    async fn get_cart(&self, user_id: &str) -> Result<Cart, CartRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(
                "userId",
                to_attribute_value(user_id)
                    .map_err(|e| CartRepositoryError::Serialization(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| CartRepositoryError::DynamoDb(e.to_string()))?;
        if let Some(item) = output.item {
            let cart: Cart =
                from_item(item).map_err(|e| CartRepositoryError::Serialization(e.to_string()))?;
            Ok(cart)
        } else {
            Err(CartRepositoryError::NotFound)
        }
    }

    async fn save_cart(&self, cart: &Cart) -> Result<(), CartRepositoryError> {
        let item = to_item(cart).map_err(|e| CartRepositoryError::Serialization(e.to_string()))?;
        let mut request = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item));

        // Writes are conditional on the version the caller read; a losing
        // concurrent writer gets VersionConflict and must re-read.
        // "version" is a DynamoDB reserved word and needs an attribute alias.
        if cart.version <= 1 {
            request = request.condition_expression("attribute_not_exists(userId)");
        } else {
            request = request
                .condition_expression("#version = :expected")
                .expression_attribute_names("#version", "version")
                .expression_attribute_values(
                    ":expected",
                    to_attribute_value(cart.version - 1)
                        .map_err(|e| CartRepositoryError::Serialization(e.to_string()))?,
                );
        }

        match request.send().await {
            Ok(_) => Ok(()),
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("ConditionalCheckFailedException") {
                    Err(CartRepositoryError::VersionConflict)
                } else {
                    Err(CartRepositoryError::DynamoDb(error_str))
                }
            }
        }
    }
}
