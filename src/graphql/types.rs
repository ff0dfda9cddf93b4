use super::error::field_error;
use super::schema::app_state;
use crate::error::Result;
use crate::global_id::{GlobalId, IdCodec, Identify, InternalId};
use crate::model::{Business as ModelBusiness, Person as ModelPerson};
use async_graphql::{Context, ID, InputObject, Interface, Object, SimpleObject};

impl From<ID> for GlobalId {
    fn from(id: ID) -> Self {
        GlobalId::from(id.0)
    }
}

/// Any object that can be refetched by its global ID.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID"))]
pub enum Node {
    Business(Business),
    Person(Person),
}

impl Identify for Node {
    fn type_name(&self) -> &'static str {
        match self {
            Node::Business(b) => b.record.type_name(),
            Node::Person(p) => p.record.type_name(),
        }
    }

    fn internal_id(&self) -> InternalId {
        match self {
            Node::Business(b) => b.record.internal_id(),
            Node::Person(p) => p.record.internal_id(),
        }
    }
}

pub struct Business {
    id: ID,
    record: ModelBusiness,
}

impl Business {
    pub fn new(record: ModelBusiness, codec: &IdCodec) -> Result<Self> {
        let id = codec.global_id_of(&record)?.into();
        Ok(Self { id, record })
    }

    pub fn record(&self) -> &ModelBusiness {
        &self.record
    }
}

#[Object]
impl Business {
    /// Global ID
    async fn id(&self) -> ID {
        self.id.clone()
    }

    async fn name(&self) -> &str {
        &self.record.name
    }

    async fn city(&self) -> Option<&str> {
        self.record.city.as_deref()
    }

    /// People employed by this business
    async fn employees(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Person>> {
        let state = app_state(ctx)?;
        let codec = state.registry.codec();
        let people = state.directory.employees(&self.record.id).await;
        people
            .into_iter()
            .map(|p| Person::new(p, codec).map_err(field_error))
            .collect()
    }
}

pub struct Person {
    id: ID,
    record: ModelPerson,
}

impl Person {
    pub fn new(record: ModelPerson, codec: &IdCodec) -> Result<Self> {
        let id = codec.global_id_of(&record)?.into();
        Ok(Self { id, record })
    }

    pub fn record(&self) -> &ModelPerson {
        &self.record
    }
}

#[Object]
impl Person {
    /// Global ID
    async fn id(&self) -> ID {
        self.id.clone()
    }

    async fn name(&self) -> &str {
        &self.record.name
    }

    async fn email(&self) -> Option<&str> {
        self.record.email.as_deref()
    }

    async fn employer(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Business>> {
        let Some(ref employer_id) = self.record.employer else {
            return Ok(None);
        };
        let state = app_state(ctx)?;
        match state.directory.business(employer_id).await {
            Some(record) => Ok(Some(
                Business::new(record, state.registry.codec()).map_err(field_error)?,
            )),
            None => Ok(None),
        }
    }
}

#[derive(InputObject)]
pub struct RenameBusinessInput {
    pub business_id: ID,
    pub name: String,
}

#[derive(SimpleObject)]
pub struct RenameBusinessPayload {
    pub business: Business,
}

#[derive(InputObject)]
pub struct HirePersonInput {
    pub person_id: ID,
    pub business_id: ID,
}

#[derive(SimpleObject)]
pub struct HirePersonPayload {
    pub person: Person,
}
