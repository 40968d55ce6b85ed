use super::{OrdensClient, has_role, require_auth};
use crate::config::Config;
use crate::http_handler::common::{OrdemStatus, UserRole};
use crate::session::{ACCESS_TOKEN_KEY, SessionStore, USER_KEY};
use axum::extract::{Multipart, Path as UrlPath, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Barrier;

/// Serves `router` on an ephemeral loopback port and returns the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

async fn client_for(router: Router, dir: &TempDir) -> OrdensClient {
    let base = serve(router).await;
    OrdensClient::new(&Config::new(&base, dir.path())).unwrap()
}

fn admin_user_json() -> Value {
    json!({
        "id": 1,
        "username": "alice",
        "role": "admin",
        "nome": "Alice",
        "telegram_id": null,
        "created_at": "2025-03-01T09:00:00"
    })
}

fn ordem_item_json(numero_os: &str, tipo_os: &str) -> Value {
    json!({
        "id": 10,
        "numero_os": numero_os,
        "status": "aguardando",
        "tipo_os": tipo_os,
        "tecnico_campo_nome": "Bob",
        "tecnico_executor_nome": null,
        "pppoe_cliente": "cliente01",
        "motivo_abertura": null,
        "cidade": "Fortaleza",
        "criado_em": "2025-06-01T08:30:00"
    })
}

fn ordem_full_json(numero_os: &str, status: &str) -> Value {
    json!({
        "id": 3,
        "numero_os": numero_os,
        "status": status,
        "tecnico_campo_id": 2,
        "foto_power_meter": "https://cdn.example/power.jpg",
        "foto_caixa": "https://cdn.example/caixa.jpg",
        "print_os_cliente": "https://cdn.example/print.png",
        "pppoe_cliente": "cliente01",
        "criado_em": "2025-06-01T08:30:00"
    })
}

fn login_router() -> Router {
    Router::new().route(
        "/api/v1/auth/login",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            // No token exists yet, so no Authorization header may be sent.
            assert!(headers.get("authorization").is_none());
            assert_eq!(body["username"], "alice");
            assert_eq!(body["password"], "s3cret");
            Json(json!({
                "access_token": "T0KEN",
                "token_type": "bearer",
                "user": admin_user_json()
            }))
        }),
    )
}

#[tokio::test]
async fn login_keeps_session_in_memory_and_storage() {
    let dir = TempDir::new().unwrap();
    let mut client = client_for(login_router(), &dir).await;
    assert!(!client.is_authenticated());
    assert!(!require_auth(&client));

    let response = client.login("alice", "s3cret").await.unwrap();
    assert_eq!(response.access_token(), "T0KEN");
    assert_eq!(response.user().username(), "alice");

    assert!(client.is_authenticated());
    assert!(require_auth(&client));
    assert_eq!(client.user().unwrap().role(), UserRole::Admin);

    let store = SessionStore::open(dir.path()).unwrap();
    assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("T0KEN"));
    let persisted: Value = store.get_json(USER_KEY).unwrap();
    assert_eq!(persisted["username"], "alice");
    assert_eq!(persisted["role"], "admin");
}

#[tokio::test]
async fn logout_clears_memory_and_both_keys() {
    let dir = TempDir::new().unwrap();
    let mut client = client_for(login_router(), &dir).await;
    client.login("alice", "s3cret").await.unwrap();

    client.logout();

    assert!(!client.is_authenticated());
    assert!(client.user().is_none());
    let store = SessionStore::open(dir.path()).unwrap();
    assert!(store.get(ACCESS_TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
}

#[tokio::test]
async fn failed_login_surfaces_detail_and_leaves_session_empty() {
    let router = Router::new().route(
        "/api/v1/auth/login",
        post(|| async {
            (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Usuário ou senha incorretos"})))
        }),
    );
    let dir = TempDir::new().unwrap();
    let mut client = client_for(router, &dir).await;

    let err = client.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Usuário ou senha incorretos");
    assert!(!client.is_authenticated());
    let store = SessionStore::open(dir.path()).unwrap();
    assert!(store.get(ACCESS_TOKEN_KEY).is_none());
}

#[tokio::test]
async fn construction_restores_persisted_session() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::open(dir.path()).unwrap();
    store.set(ACCESS_TOKEN_KEY, "T0KEN").unwrap();
    store.set(USER_KEY, &admin_user_json().to_string()).unwrap();

    let client = OrdensClient::new(&Config::new("http://127.0.0.1:9", dir.path())).unwrap();
    assert!(client.is_authenticated());
    assert_eq!(client.user().unwrap().username(), "alice");
    assert!(has_role(&client, &[UserRole::Admin, UserRole::Execucao]));
    assert!(has_role(&client, &[UserRole::Execucao, UserRole::Admin]));
    assert!(!has_role(&client, &[UserRole::Campo, UserRole::Execucao]));
}

#[tokio::test]
async fn token_without_profile_restores_as_absent_user() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::open(dir.path()).unwrap();
    store.set(ACCESS_TOKEN_KEY, "T0KEN").unwrap();

    let client = OrdensClient::new(&Config::new("http://127.0.0.1:9", dir.path())).unwrap();
    assert!(client.is_authenticated());
    assert!(client.user().is_none());
    // Role checks need a held profile, not just a token.
    assert!(!has_role(&client, &[UserRole::Admin]));
}

#[tokio::test]
async fn authenticated_calls_carry_the_bearer_token() {
    let router = login_router().route(
        "/api/v1/usuarios",
        get(|headers: HeaderMap| async move {
            assert_eq!(headers.get("authorization").unwrap(), "Bearer T0KEN");
            Json(json!([admin_user_json()]))
        }),
    );
    let dir = TempDir::new().unwrap();
    let mut client = client_for(router, &dir).await;
    client.login("alice", "s3cret").await.unwrap();

    let usuarios = client.usuarios().await.unwrap();
    assert_eq!(usuarios.len(), 1);
    assert_eq!(usuarios[0].display_name(), "Alice");
}

#[tokio::test]
async fn error_detail_is_surfaced_verbatim() {
    let router = Router::new().route(
        "/api/v1/os/:id",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "not found"}))) }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let err = client.ordem(77).await.unwrap_err();
    assert_eq!(err.to_string(), "not found");
}

#[tokio::test]
async fn unparsable_error_body_falls_back_to_the_status_code() {
    let router = Router::new().route(
        "/api/v1/relatorios/dashboard",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "definitely not json") }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let err = client.dashboard().await.unwrap_err();
    assert!(err.to_string().contains("500"), "got: {err}");
}

#[tokio::test]
async fn delete_resolves_on_no_content_without_touching_the_body() {
    let router = Router::new()
        .route("/api/v1/os/:id", delete(|| async { StatusCode::NO_CONTENT }))
        .route("/api/v1/usuarios/:id", delete(|| async { StatusCode::NO_CONTENT }));
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    client.delete_ordem(5).await.unwrap();
    client.delete_usuario(8).await.unwrap();
}

async fn combined_list_handler(
    State(barrier): State<Arc<Barrier>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    assert_eq!(params.get("limit").map(String::as_str), Some("100"));
    // Hold each response until both list calls have arrived: the pair must
    // be in flight simultaneously, not sequential.
    barrier.wait().await;
    let item = match params.get("tipo_os").map(String::as_str) {
        Some("rompimento") => ordem_item_json("OS-2025-001", "rompimento"),
        Some("manutencao") => ordem_item_json("OS-2025-002", "manutencao"),
        other => panic!("unexpected tipo_os filter: {other:?}"),
    };
    Json(json!([item]))
}

#[tokio::test]
async fn combined_fetch_overlaps_and_keeps_rompimento_first() {
    let router = Router::new()
        .route("/api/v1/os", get(combined_list_handler))
        .with_state(Arc::new(Barrier::new(2)));
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let ordens = tokio::time::timeout(
        Duration::from_secs(5),
        client.ordens_rompimento_manutencao(),
    )
    .await
    .expect("both list calls must be issued before either resolves")
    .unwrap();

    assert_eq!(ordens.len(), 2);
    assert_eq!(ordens[0].numero_os(), "OS-2025-001");
    assert_eq!(ordens[1].numero_os(), "OS-2025-002");
}

#[tokio::test]
async fn combined_fetch_fails_entirely_when_one_half_fails() {
    let router = Router::new().route(
        "/api/v1/os",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            if params.get("tipo_os").map(String::as_str) == Some("manutencao") {
                return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"detail": "indisponível"})));
            }
            (StatusCode::OK, Json(json!([ordem_item_json("OS-2025-001", "rompimento")])))
        }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let err = client.ordens_rompimento_manutencao().await.unwrap_err();
    assert_eq!(err.to_string(), "indisponível");
}

#[tokio::test]
async fn assumir_sends_the_executor_id() {
    let router = Router::new().route(
        "/api/v1/os/:id/assumir",
        patch(|UrlPath(id): UrlPath<u32>, Json(body): Json<Value>| async move {
            assert_eq!(id, 3);
            assert_eq!(body["tecnico_executor_id"], 7);
            Json(ordem_full_json("OS-2025-003", "em_andamento"))
        }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let ordem = client.assumir_ordem(3, 7).await.unwrap();
    assert_eq!(ordem.status(), OrdemStatus::EmAndamento);
}

#[tokio::test]
async fn finalizar_sends_photo_reference_and_null_notes() {
    let router = Router::new().route(
        "/api/v1/os/:id/finalizar",
        patch(|Json(body): Json<Value>| async move {
            assert_eq!(body["foto_comprovacao"], "https://cdn.example/proof.jpg");
            assert!(body["observacoes"].is_null());
            Json(ordem_full_json("OS-2025-003", "concluido"))
        }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let ordem =
        client.finalizar_ordem(3, "https://cdn.example/proof.jpg", None).await.unwrap();
    assert_eq!(ordem.status(), OrdemStatus::Concluido);
}

#[tokio::test]
async fn finalizar_com_foto_uploads_multipart_fields() {
    let router = Router::new().route(
        "/api/v1/os/:id/finalizar-com-foto",
        patch(|mut multipart: Multipart| async move {
            let mut saw_foto = false;
            let mut observacoes = None;
            while let Some(field) = multipart.next_field().await.unwrap() {
                match field.name().unwrap().to_string().as_str() {
                    "foto_comprovacao" => {
                        assert!(!field.bytes().await.unwrap().is_empty());
                        saw_foto = true;
                    }
                    "observacoes" => observacoes = Some(field.text().await.unwrap()),
                    other => panic!("unexpected multipart field: {other}"),
                }
            }
            assert!(saw_foto);
            assert_eq!(observacoes.as_deref(), Some("troca de conector"));
            Json(ordem_full_json("OS-2025-003", "concluido"))
        }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let foto = dir.path().join("comprovacao.jpg");
    std::fs::write(&foto, b"\xff\xd8fake-jpeg-bytes").unwrap();

    let ordem = client
        .finalizar_ordem_com_foto(3, &foto, Some(String::from("troca de conector")))
        .await
        .unwrap();
    assert_eq!(ordem.status(), OrdemStatus::Concluido);
}

#[tokio::test]
async fn finalizar_com_foto_rejects_missing_files_before_sending() {
    let dir = TempDir::new().unwrap();
    let client =
        OrdensClient::new(&Config::new("http://127.0.0.1:9", dir.path())).unwrap();

    let missing = dir.path().join("nope.jpg");
    let err = client.finalizar_ordem_com_foto(3, &missing, None).await.unwrap_err();
    assert!(err.to_string().contains("upload file"));
}

#[tokio::test]
async fn update_usuario_sends_only_present_fields() {
    let router = Router::new().route(
        "/api/v1/usuarios/:id",
        patch(|Json(body): Json<Value>| async move {
            let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
            assert_eq!(keys, ["nome"]);
            Json(json!({
                "id": 1,
                "username": "alice",
                "role": "admin",
                "nome": "Alice Braga",
                "telegram_id": null,
                "created_at": "2025-03-01T09:00:00"
            }))
        }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let updates = super::UsuarioUpdate {
        nome: Some(String::from("Alice Braga")),
        ..super::UsuarioUpdate::default()
    };
    let usuario = client.update_usuario(1, updates).await.unwrap();
    assert_eq!(usuario.nome(), Some("Alice Braga"));
}

#[tokio::test]
async fn create_usuario_sends_role_in_wire_casing() {
    let router = Router::new().route(
        "/api/v1/usuarios",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["username"], "novo.tecnico");
            assert_eq!(body["role"], "execucao");
            assert!(body.get("nome").is_none());
            assert!(body.get("telegram_id").is_none());
            (
                StatusCode::CREATED,
                Json(json!({
                    "id": 12,
                    "username": "novo.tecnico",
                    "role": "execucao",
                    "nome": null,
                    "telegram_id": null,
                    "created_at": "2025-07-01T10:00:00"
                })),
            )
        }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let novo = super::NovoUsuario {
        username: String::from("novo.tecnico"),
        password: String::from("s3nh4-f0rte"),
        role: UserRole::Execucao,
        nome: None,
        telegram_id: None,
    };
    let usuario = client.create_usuario(novo).await.unwrap();
    assert_eq!(usuario.id(), 12);
    assert_eq!(usuario.role(), UserRole::Execucao);
}

#[tokio::test]
async fn dashboard_decodes_metrics_and_defaults_missing_sections() {
    let router = Router::new().route(
        "/api/v1/relatorios/dashboard",
        get(|| async {
            Json(json!({
                "totais": {"aguardando": 4, "em_andamento": 2, "concluido": 9, "total": 15},
                "metricas": {"tempo_medio_espera_min": 12.5},
                "por_tecnico": [
                    {"tecnico_nome": "Bob", "total_concluidas": 9, "tempo_medio_execucao_min": 40.0}
                ]
            }))
        }),
    );
    let dir = TempDir::new().unwrap();
    let client = client_for(router, &dir).await;

    let dashboard = client.dashboard().await.unwrap();
    assert_eq!(dashboard.totais().aguardando(), 4);
    assert_eq!(dashboard.totais().total(), 15);
    assert_eq!(dashboard.metricas().tempo_medio_espera_min(), Some(12.5));
    assert!(dashboard.metricas().tempo_medio_execucao_min().is_none());
    assert_eq!(dashboard.por_tecnico().len(), 1);
    assert!(dashboard.por_cidade().is_empty());
}
