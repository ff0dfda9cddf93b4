use relay_node::config::RelayConfig;
use relay_node::global_id::{IdFormat, decode, encode};
use relay_node::graphql::{RelaySchema, build_schema};
use relay_node::storage::{Directory, DirectoryData};
use serde_json::{Value, json};

fn schema_with(config: &RelayConfig) -> RelaySchema {
    let directory = Directory::from_data(DirectoryData::sample()).unwrap();
    build_schema(config, directory).unwrap()
}

fn schema() -> RelaySchema {
    schema_with(&RelayConfig::default())
}

async fn run(schema: &RelaySchema, query: &str) -> Value {
    serde_json::to_value(schema.execute(query).await).unwrap()
}

fn gid(type_name: &str, internal_id: &str) -> String {
    encode(type_name, internal_id).unwrap().into_inner()
}

fn error_code(response: &Value, index: usize) -> &str {
    response["errors"][index]["extensions"]["code"]
        .as_str()
        .unwrap()
}

// =============================================================================
// Node refetching
// =============================================================================

#[tokio::test]
async fn test_node_returns_business() {
    let id = gid("Business", "19");
    let response = run(
        &schema(),
        &format!(r#"{{ node(id: "{id}") {{ __typename id ... on Business {{ name city }} }} }}"#),
    )
    .await;

    assert!(response["errors"].is_null(), "{response}");
    assert_eq!(
        response["data"]["node"],
        json!({
            "__typename": "Business",
            "id": id,
            "name": "Joe's Diner",
            "city": "Springfield",
        })
    );
}

#[tokio::test]
async fn test_node_returns_person_with_global_employer_id() {
    let id = gid("Person", "1");
    let response = run(
        &schema(),
        &format!(
            r#"{{ node(id: "{id}") {{ __typename ... on Person {{ name employer {{ id name }} }} }} }}"#
        ),
    )
    .await;

    let node = &response["data"]["node"];
    assert_eq!(node["__typename"], "Person");
    assert_eq!(node["name"], "Ada Lovelace");
    assert_eq!(node["employer"]["id"], gid("Business", "19"));
    assert_eq!(node["employer"]["name"], "Joe's Diner");
}

#[tokio::test]
async fn test_missing_record_is_null_without_error() {
    let id = gid("Business", "999");
    let response = run(&schema(), &format!(r#"{{ node(id: "{id}") {{ id }} }}"#)).await;

    assert!(response["errors"].is_null(), "{response}");
    assert!(response["data"]["node"].is_null());
}

#[tokio::test]
async fn test_malformed_id_is_a_field_error() {
    let response = run(
        &schema(),
        r#"{ node(id: "not-a-valid-token") { id } businesses { name } }"#,
    )
    .await;

    assert_eq!(error_code(&response, 0), "MALFORMED_ID");
    assert_eq!(response["errors"][0]["path"], json!(["node"]));
    assert!(response["data"]["node"].is_null());
    // Sibling fields still resolve.
    assert_eq!(response["data"]["businesses"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_type() {
    let id = gid("Planet", "3");
    let response = run(&schema(), &format!(r#"{{ node(id: "{id}") {{ id }} }}"#)).await;

    assert_eq!(error_code(&response, 0), "UNKNOWN_TYPE");
    assert!(response["data"]["node"].is_null());
}

#[tokio::test]
async fn test_non_numeric_person_id_is_malformed() {
    let id = gid("Person", "abc");
    let response = run(&schema(), &format!(r#"{{ node(id: "{id}") {{ id }} }}"#)).await;

    assert_eq!(error_code(&response, 0), "MALFORMED_ID");
}

#[tokio::test]
async fn test_nodes_preserves_order_and_gaps() {
    let ids = [gid("Business", "19"), gid("Business", "999"), gid("Person", "2")];
    let response = run(
        &schema(),
        &format!(
            r#"{{ nodes(ids: ["{}", "{}", "{}"]) {{ id }} }}"#,
            ids[0], ids[1], ids[2]
        ),
    )
    .await;

    assert!(response["errors"].is_null(), "{response}");
    assert_eq!(
        response["data"]["nodes"],
        json!([{ "id": ids[0] }, null, { "id": ids[2] }])
    );
}

#[tokio::test]
async fn test_nodes_with_malformed_id_fails_only_that_field() {
    let id = gid("Business", "19");
    let response = run(
        &schema(),
        &format!(r#"{{ nodes(ids: ["{id}", "garbage"]) {{ id }} people {{ name }} }}"#),
    )
    .await;

    assert_eq!(error_code(&response, 0), "MALFORMED_ID");
    assert!(response["data"]["nodes"].is_null());
    assert_eq!(response["data"]["people"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Typed lookups
// =============================================================================

#[tokio::test]
async fn test_business_lookup() {
    let id = gid("Business", "42");
    let response = run(&schema(), &format!(r#"{{ business(id: "{id}") {{ name }} }}"#)).await;

    assert_eq!(response["data"]["business"]["name"], "Acme Hardware");
}

#[tokio::test]
async fn test_business_lookup_with_person_id_is_type_mismatch() {
    let id = gid("Person", "1");
    let response = run(
        &schema(),
        &format!(r#"{{ business(id: "{id}") {{ name }} person(id: "{id}") {{ name }} }}"#),
    )
    .await;

    assert_eq!(error_code(&response, 0), "TYPE_MISMATCH");
    assert_eq!(response["errors"].as_array().unwrap().len(), 1);
    assert!(response["data"]["business"].is_null());
    assert_eq!(response["data"]["person"]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_listed_ids_are_global() {
    let response = run(&schema(), "{ businesses { id } people { id } }").await;

    for business in response["data"]["businesses"].as_array().unwrap() {
        let descriptor = decode(business["id"].as_str().unwrap()).unwrap();
        assert_eq!(descriptor.type_name, "Business");
    }
    for person in response["data"]["people"].as_array().unwrap() {
        let descriptor = decode(person["id"].as_str().unwrap()).unwrap();
        assert_eq!(descriptor.type_name, "Person");
        assert!(descriptor.internal_id.parse::<u64>().is_ok());
    }
}

#[tokio::test]
async fn test_business_employees() {
    let id = gid("Business", "19");
    let response = run(
        &schema(),
        &format!(r#"{{ business(id: "{id}") {{ employees {{ id name }} }} }}"#),
    )
    .await;

    assert_eq!(
        response["data"]["business"]["employees"],
        json!([{ "id": gid("Person", "1"), "name": "Ada Lovelace" }])
    );
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_rename_business() {
    let schema = schema();
    let id = gid("Business", "19");
    let response = run(
        &schema,
        &format!(
            r#"mutation {{ renameBusiness(input: {{ businessId: "{id}", name: "Joe's Bistro" }}) {{ business {{ id name }} }} }}"#
        ),
    )
    .await;

    assert!(response["errors"].is_null(), "{response}");
    assert_eq!(
        response["data"]["renameBusiness"]["business"],
        json!({ "id": id, "name": "Joe's Bistro" })
    );

    let response = run(&schema, &format!(r#"{{ node(id: "{id}") {{ ... on Business {{ name }} }} }}"#)).await;
    assert_eq!(response["data"]["node"]["name"], "Joe's Bistro");
}

#[tokio::test]
async fn test_rename_business_rejects_person_id() {
    let id = gid("Person", "1");
    let response = run(
        &schema(),
        &format!(
            r#"mutation {{ renameBusiness(input: {{ businessId: "{id}", name: "Oops" }}) {{ business {{ name }} }} }}"#
        ),
    )
    .await;

    assert_eq!(error_code(&response, 0), "TYPE_MISMATCH");
    assert!(response["data"]["renameBusiness"].is_null());
}

#[tokio::test]
async fn test_rename_missing_business_is_not_found() {
    let id = gid("Business", "999");
    let response = run(
        &schema(),
        &format!(
            r#"mutation {{ renameBusiness(input: {{ businessId: "{id}", name: "Ghost" }}) {{ business {{ name }} }} }}"#
        ),
    )
    .await;

    assert_eq!(error_code(&response, 0), "NOT_FOUND");
}

#[tokio::test]
async fn test_hire_person() {
    let person = gid("Person", "2");
    let business = gid("Business", "42");
    let response = run(
        &schema(),
        &format!(
            r#"mutation {{ hirePerson(input: {{ personId: "{person}", businessId: "{business}" }}) {{ person {{ id employer {{ id }} }} }} }}"#
        ),
    )
    .await;

    assert!(response["errors"].is_null(), "{response}");
    assert_eq!(
        response["data"]["hirePerson"]["person"],
        json!({ "id": person, "employer": { "id": business } })
    );
}

#[tokio::test]
async fn test_hire_person_with_swapped_ids() {
    let person = gid("Person", "2");
    let business = gid("Business", "42");
    let response = run(
        &schema(),
        &format!(
            r#"mutation {{ hirePerson(input: {{ personId: "{business}", businessId: "{person}" }}) {{ person {{ id }} }} }}"#
        ),
    )
    .await;

    assert_eq!(error_code(&response, 0), "TYPE_MISMATCH");
}

// =============================================================================
// ID formats
// =============================================================================

#[tokio::test]
async fn test_standard_format_schema() {
    let mut config = RelayConfig::default();
    config.ids.format = IdFormat::Standard;
    let response = run(&schema_with(&config), r#"{ business(id: "QnVzaW5lc3M6MTk=") { id } }"#).await;

    assert_eq!(response["data"]["business"]["id"], "QnVzaW5lc3M6MTk=");
}

#[tokio::test]
async fn test_legacy_ids_accepted_after_rotation() {
    let legacy = "QnVzaW5lc3M6MTk=";

    let strict = run(&schema(), &format!(r#"{{ node(id: "{legacy}") {{ id }} }}"#)).await;
    assert_eq!(error_code(&strict, 0), "MALFORMED_ID");

    let mut config = RelayConfig::default();
    config.ids.accept = vec![IdFormat::Standard];
    let rotated = run(&schema_with(&config), &format!(r#"{{ node(id: "{legacy}") {{ id }} }}"#)).await;

    assert!(rotated["errors"].is_null(), "{rotated}");
    // Refetched nodes come back with IDs in the current format.
    assert_eq!(rotated["data"]["node"]["id"], "QnVzaW5lc3M6MTk");
}
