use super::resolver::NodeResolver;
use crate::error::{RelayError, Result};
use crate::global_id::{IdCodec, InternalId, TypeName};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub struct NodeRegistryBuilder<N> {
    codec: IdCodec,
    resolvers: HashMap<TypeName, Arc<dyn NodeResolver<N>>>,
}

impl<N: Send + 'static> NodeRegistryBuilder<N> {
    pub fn new(codec: IdCodec) -> Self {
        Self {
            codec,
            resolvers: HashMap::new(),
        }
    }

    /// Registers the resolver for `type_name`. Each type may be registered once.
    pub fn register<R>(mut self, type_name: &str, resolver: R) -> Result<Self>
    where
        R: NodeResolver<N> + 'static,
    {
        let type_name = TypeName::new(type_name)?;
        if self.resolvers.contains_key(&type_name) {
            return Err(RelayError::DuplicateType(type_name.to_string()));
        }
        tracing::debug!(type_name = %type_name, "Registering node type");
        self.resolvers.insert(type_name, Arc::new(resolver));
        Ok(self)
    }

    pub fn build(self) -> NodeRegistry<N> {
        NodeRegistry {
            codec: self.codec,
            resolvers: self.resolvers,
        }
    }
}

/// Immutable map from type name to resolver.
pub struct NodeRegistry<N> {
    codec: IdCodec,
    resolvers: HashMap<TypeName, Arc<dyn NodeResolver<N>>>,
}

impl<N: Send + 'static> NodeRegistry<N> {
    pub fn builder(codec: IdCodec) -> NodeRegistryBuilder<N> {
        NodeRegistryBuilder::new(codec)
    }

    pub fn codec(&self) -> &IdCodec {
        &self.codec
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.resolvers.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&TypeName> {
        let mut names: Vec<_> = self.resolvers.keys().collect();
        names.sort();
        names
    }

    /// Decodes `global_id` and hands it to the resolver registered for its type.
    pub async fn fetch(&self, global_id: &str) -> Result<Option<N>> {
        let descriptor = self.codec.decode(global_id)?;
        self.dispatch(descriptor.type_name.as_str(), descriptor.internal_id)
            .await
    }

    /// Like [`NodeRegistry::fetch`], but the token must name `expected_type_name`.
    pub async fn fetch_expected(
        &self,
        global_id: &str,
        expected_type_name: &str,
    ) -> Result<Option<N>> {
        let internal_id = self
            .codec
            .decode_with_expected_type(global_id, expected_type_name)?;
        self.dispatch(expected_type_name, internal_id).await
    }

    /// Resolves each ID independently, in input order.
    pub async fn fetch_many<S: AsRef<str>>(&self, global_ids: &[S]) -> Vec<Result<Option<N>>> {
        let mut results = Vec::with_capacity(global_ids.len());
        for global_id in global_ids {
            results.push(self.fetch(global_id.as_ref()).await);
        }
        results
    }

    async fn dispatch(&self, type_name: &str, internal_id: InternalId) -> Result<Option<N>> {
        let Some(resolver) = self.resolvers.get(type_name) else {
            tracing::warn!(type_name, "No resolver registered for node type");
            return Err(RelayError::UnknownType(type_name.to_string()));
        };

        tracing::debug!(type_name, internal_id = %internal_id, "Dispatching node fetch");
        resolver.fetch(internal_id).await
    }
}

impl<N> fmt::Debug for NodeRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.resolvers.keys().map(TypeName::as_str).collect();
        names.sort_unstable();
        f.debug_struct("NodeRegistry")
            .field("codec", &self.codec)
            .field("types", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_id::{IdFormat, encode};

    #[derive(Debug, Clone, PartialEq)]
    enum Record {
        Business(String),
        Person(u64),
    }

    fn registry() -> NodeRegistry<Record> {
        let businesses: Arc<HashMap<String, String>> = Arc::new(
            [("19".to_string(), "Joe's Diner".to_string())]
                .into_iter()
                .collect(),
        );

        NodeRegistry::builder(IdCodec::default())
            .register("Business", move |id: InternalId| {
                let businesses = Arc::clone(&businesses);
                async move {
                    Ok::<_, RelayError>(businesses.get(id.as_str()).cloned().map(Record::Business))
                }
            })
            .unwrap()
            .register("Person", |id: InternalId| async move {
                let key: u64 = id.parse()?;
                Ok::<_, RelayError>((key == 1).then_some(Record::Person(key)))
            })
            .unwrap()
            .build()
    }

    #[tokio::test]
    async fn test_fetch_dispatches_to_registered_resolver() {
        let registry = registry();
        let id = encode("Business", "19").unwrap();
        let record = registry.fetch(id.as_str()).await.unwrap();
        assert_eq!(record, Some(Record::Business("Joe's Diner".to_string())));
    }

    #[tokio::test]
    async fn test_missing_record_is_not_an_error() {
        let registry = registry();
        let id = encode("Business", "999").unwrap();
        assert_eq!(registry.fetch(id.as_str()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_type() {
        let registry = registry();
        let id = encode("Planet", "3").unwrap();
        assert!(matches!(
            registry.fetch(id.as_str()).await,
            Err(RelayError::UnknownType(name)) if name == "Planet"
        ));
    }

    #[tokio::test]
    async fn test_malformed_token() {
        let registry = registry();
        assert!(matches!(
            registry.fetch("not-a-valid-token").await,
            Err(RelayError::MalformedId(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_expected_type_checks_before_dispatch() {
        let registry = registry();
        let id = encode("Business", "19").unwrap();
        assert!(matches!(
            registry.fetch_expected(id.as_str(), "Person").await,
            Err(RelayError::TypeMismatch { .. })
        ));
        assert!(
            registry
                .fetch_expected(id.as_str(), "Business")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_fetch_expected_unregistered_type() {
        let registry = registry();
        let id = encode("Planet", "3").unwrap();
        assert!(matches!(
            registry.fetch_expected(id.as_str(), "Planet").await,
            Err(RelayError::UnknownType(_))
        ));
    }

    #[tokio::test]
    async fn test_resolver_errors_propagate() {
        let registry = registry();
        let id = encode("Person", "abc").unwrap();
        assert!(matches!(
            registry.fetch(id.as_str()).await,
            Err(RelayError::MalformedId(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_many_preserves_order() {
        let registry = registry();
        let ids = vec![
            encode("Person", 1u64).unwrap().into_inner(),
            "garbage".to_string(),
            encode("Business", "404").unwrap().into_inner(),
            encode("Business", "19").unwrap().into_inner(),
        ];
        let results = registry.fetch_many(&ids).await;
        assert_eq!(results.len(), 4);
        assert!(matches!(results[0], Ok(Some(Record::Person(1)))));
        assert!(matches!(results[1], Err(RelayError::MalformedId(_))));
        assert!(matches!(results[2], Ok(None)));
        assert!(matches!(results[3], Ok(Some(Record::Business(_)))));
    }

    async fn missing(_: InternalId) -> Result<Option<Record>> {
        Ok(None)
    }

    #[test]
    fn test_duplicate_registration() {
        let result = NodeRegistry::<Record>::builder(IdCodec::default())
            .register("Person", missing)
            .unwrap()
            .register("Person", missing);
        assert!(matches!(result, Err(RelayError::DuplicateType(_))));
    }

    #[test]
    fn test_invalid_type_name_registration() {
        let result = NodeRegistry::<Record>::builder(IdCodec::default())
            .register("Bad:Name", missing);
        assert!(matches!(result, Err(RelayError::InvalidTypeName(_))));
    }

    #[test]
    fn test_type_names_sorted() {
        let registry = registry();
        let names: Vec<_> = registry.type_names().into_iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Business", "Person"]);
        assert!(registry.is_registered("Person"));
        assert!(!registry.is_registered("Planet"));
    }

    #[tokio::test]
    async fn test_registry_uses_its_codec() {
        let codec = IdCodec::new(IdFormat::Standard);
        let registry = NodeRegistry::builder(codec.clone())
            .register("Person", |id: InternalId| async move {
                Ok::<_, RelayError>(Some(Record::Person(id.parse()?)))
            })
            .unwrap()
            .build();

        let classic = codec.encode("Person", 5u64).unwrap();
        assert_eq!(
            registry.fetch(classic.as_str()).await.unwrap(),
            Some(Record::Person(5))
        );
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NodeRegistry<Record>>();
    }
}
