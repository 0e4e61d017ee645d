//! Product aggregate entity.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use crate::domain::foundation::{
    Aggregate, AggregateRoot, DomainError, Guard, GuardResult, Outcome, UniqueId,
};

use super::{ProductCreated, ProductName};

/// Minimum length for a product description.
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

/// Maximum length for a product description.
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Product aggregate.
///
/// # Invariants
///
/// - `description` is non-blank and 10-255 characters
/// - a `ProductCreated` event is recorded when created through [`Product::create`]
#[derive(Debug, Clone)]
pub struct Product {
    root: AggregateRoot<ProductCreated>,
    name: ProductName,
    description: String,
}

impl Product {
    /// Creates a product, generating an ID when none is given.
    ///
    /// Fails with the first violated description rule.
    pub fn create(
        name: ProductName,
        description: impl Into<String>,
        id: Option<UniqueId>,
    ) -> Outcome<Product> {
        let description = description.into();
        let guard = Self::validate_description(&description);
        if let Some(message) = guard.error() {
            debug!(error = message, "product rejected");
            return Outcome::fail(message);
        }

        let id = id.unwrap_or_default().to_string();
        let created = ProductCreated::new(id.clone());
        let mut product = Self {
            root: AggregateRoot::new(id),
            name,
            description,
        };
        product.root.add_domain_event(created);

        Outcome::ok(product)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the name. `ProductName` is already validated.
    pub fn set_name(&mut self, name: ProductName) {
        self.name = name;
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// - `InvariantViolated` if the description breaks a rule; the product
    ///   keeps its previous description
    pub fn set_description(&mut self, value: impl Into<String>) -> Result<(), DomainError> {
        let value = value.into();
        if let Some(message) = Self::validate_description(&value).error() {
            return Err(DomainError::invariant(message).with_detail("product_id", self.id()));
        }
        self.description = value;
        Ok(())
    }

    fn validate_description(description: &str) -> GuardResult {
        Guard::combine([
            Guard::not_empty(description, "description"),
            Guard::min_length(description, MIN_DESCRIPTION_LENGTH, "description"),
            Guard::max_length(description, MAX_DESCRIPTION_LENGTH, "description"),
        ])
    }
}

impl Aggregate for Product {
    type Event = ProductCreated;

    fn root(&self) -> &AggregateRoot<ProductCreated> {
        &self.root
    }

    fn clear_events(&mut self) {
        self.root.clear_events();
    }

    fn take_events(&mut self) -> Vec<ProductCreated> {
        self.root.take_events()
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Product", 3)?;
        state.serialize_field("id", self.id())?;
        state.serialize_field("name", self.name.value())?;
        state.serialize_field("description", &self.description)?;
        state.end()
    }
}
