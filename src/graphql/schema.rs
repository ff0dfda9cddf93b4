use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::config::RelayConfig;
use crate::error::Result;
use crate::global_id::{IdCodec, InternalId};
use crate::model::{Business as ModelBusiness, Person as ModelPerson};
use crate::node::NodeRegistry;
use crate::storage::Directory;

use super::error::field_error;
use super::types::*;

pub type RelaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub registry: NodeRegistry<Node>,
    pub directory: Arc<Directory>,
}

pub fn build_schema(config: &RelayConfig, directory: Directory) -> Result<RelaySchema> {
    let directory = Arc::new(directory);
    let registry = build_registry(config.codec(), Arc::clone(&directory))?;
    let state = Arc::new(AppState {
        registry,
        directory,
    });

    Ok(Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish())
}

/// Registers one resolver per node type, each backed by the directory.
pub fn build_registry(codec: IdCodec, directory: Arc<Directory>) -> Result<NodeRegistry<Node>> {
    let (business_dir, business_codec) = (Arc::clone(&directory), codec.clone());
    let (person_dir, person_codec) = (directory, codec.clone());

    Ok(NodeRegistry::builder(codec)
        .register(ModelBusiness::TYPE_NAME, move |id: InternalId| {
            fetch_business(Arc::clone(&business_dir), business_codec.clone(), id)
        })?
        .register(ModelPerson::TYPE_NAME, move |id: InternalId| {
            fetch_person(Arc::clone(&person_dir), person_codec.clone(), id)
        })?
        .build())
}

async fn fetch_business(
    directory: Arc<Directory>,
    codec: IdCodec,
    id: InternalId,
) -> Result<Option<Node>> {
    match directory.business(id.as_str()).await {
        Some(record) => Ok(Some(Node::Business(Business::new(record, &codec)?))),
        None => Ok(None),
    }
}

async fn fetch_person(
    directory: Arc<Directory>,
    codec: IdCodec,
    id: InternalId,
) -> Result<Option<Node>> {
    let key: u64 = id.parse()?;
    match directory.person(key).await {
        Some(record) => Ok(Some(Node::Person(Person::new(record, &codec)?))),
        None => Ok(None),
    }
}

pub(crate) fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch any node by its global ID
    async fn node(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Node>> {
        let state = app_state(ctx)?;
        state.registry.fetch(&id).await.map_err(field_error)
    }

    /// Fetch several nodes by global ID, in the order given
    async fn nodes(
        &self,
        ctx: &Context<'_>,
        ids: Vec<ID>,
    ) -> async_graphql::Result<Option<Vec<Option<Node>>>> {
        let state = app_state(ctx)?;
        let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        let nodes = state
            .registry
            .fetch_many(&ids)
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .map_err(field_error)?;
        Ok(Some(nodes))
    }

    /// Get a business by global ID
    async fn business(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Business>> {
        let state = app_state(ctx)?;
        let node = state
            .registry
            .fetch_expected(&id, ModelBusiness::TYPE_NAME)
            .await
            .map_err(field_error)?;
        Ok(match node {
            Some(Node::Business(business)) => Some(business),
            _ => None,
        })
    }

    /// Get a person by global ID
    async fn person(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Person>> {
        let state = app_state(ctx)?;
        let node = state
            .registry
            .fetch_expected(&id, ModelPerson::TYPE_NAME)
            .await
            .map_err(field_error)?;
        Ok(match node {
            Some(Node::Person(person)) => Some(person),
            _ => None,
        })
    }

    /// List all businesses
    async fn businesses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Business>> {
        let state = app_state(ctx)?;
        let codec = state.registry.codec();
        state
            .directory
            .businesses()
            .await
            .into_iter()
            .map(|b| Business::new(b, codec).map_err(field_error))
            .collect()
    }

    /// List all people
    async fn people(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Person>> {
        let state = app_state(ctx)?;
        let codec = state.registry.codec();
        state
            .directory
            .people()
            .await
            .into_iter()
            .map(|p| Person::new(p, codec).map_err(field_error))
            .collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Rename a business
    async fn rename_business(
        &self,
        ctx: &Context<'_>,
        input: RenameBusinessInput,
    ) -> async_graphql::Result<Option<RenameBusinessPayload>> {
        let state = app_state(ctx)?;
        let codec = state.registry.codec();
        let business_id = codec
            .decode_with_expected_type(&input.business_id, ModelBusiness::TYPE_NAME)
            .map_err(field_error)?;

        let record = state
            .directory
            .rename_business(business_id.as_str(), &input.name)
            .await
            .map_err(field_error)?;
        let business = Business::new(record, codec).map_err(field_error)?;
        Ok(Some(RenameBusinessPayload { business }))
    }

    /// Set a person's employer
    async fn hire_person(
        &self,
        ctx: &Context<'_>,
        input: HirePersonInput,
    ) -> async_graphql::Result<Option<HirePersonPayload>> {
        let state = app_state(ctx)?;
        let codec = state.registry.codec();
        let person_id: u64 = codec
            .decode_with_expected_type(&input.person_id, ModelPerson::TYPE_NAME)
            .and_then(|id| id.parse())
            .map_err(field_error)?;
        let business_id = codec
            .decode_with_expected_type(&input.business_id, ModelBusiness::TYPE_NAME)
            .map_err(field_error)?;

        let record = state
            .directory
            .hire(person_id, business_id.as_str())
            .await
            .map_err(field_error)?;
        let person = Person::new(record, codec).map_err(field_error)?;
        Ok(Some(HirePersonPayload { person }))
    }
}
