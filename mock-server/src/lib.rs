//! In-memory implementation of the places service wire contract.
//!
//! Two surfaces on one router: the auth service at the root (`/signup`,
//! `/signin`, Bearer-verified `/users/me`) and the resource API nested
//! under `/v1/demo`, the deployment prefix the production base URL
//! carries. Resource routes authenticate by the `authorization` header;
//! the raw token and the `Bearer <token>` form are both accepted there.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    pub about: String,
}

#[derive(Deserialize)]
pub struct UpdateAvatar {
    pub avatar: String,
}

#[derive(Deserialize)]
pub struct CreateCard {
    pub name: String,
    pub link: String,
}

#[derive(Debug)]
struct UserRecord {
    id: Uuid,
    email: String,
    password: String,
    name: String,
    about: String,
    avatar: String,
}

impl UserRecord {
    fn new(email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password,
            name: "Explorer".to_string(),
            about: "Around the world".to_string(),
            avatar: "https://pictures.example/avatar-placeholder.png".to_string(),
        }
    }

    fn profile(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            about: self.about.clone(),
            avatar: self.avatar.clone(),
        }
    }

    fn account(&self) -> Account {
        Account {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

#[derive(Default)]
struct Store {
    users: Vec<UserRecord>,
    tokens: HashMap<String, Uuid>,
    // Creation order; the list endpoint returns it as-is.
    cards: Vec<Card>,
}

type Db = Arc<RwLock<Store>>;

#[derive(Debug, Error)]
pub enum ApiFailure {
    #[error("authorization required")]
    Unauthorized,
    #[error("incorrect email or password")]
    BadCredentials,
    #[error("a user with this email already exists")]
    EmailTaken,
    #[error("card not found")]
    CardNotFound,
    #[error("only the owner can delete a card")]
    NotOwner,
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = match self {
            ApiFailure::Unauthorized | ApiFailure::BadCredentials => StatusCode::UNAUTHORIZED,
            ApiFailure::EmailTaken => StatusCode::CONFLICT,
            ApiFailure::CardNotFound => StatusCode::NOT_FOUND,
            ApiFailure::NotOwner => StatusCode::FORBIDDEN,
        };
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let resources = Router::new()
        .route("/users/me", get(get_profile).patch(update_profile))
        .route("/users/me/avatar", patch(update_avatar))
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/{id}", delete(delete_card))
        .route("/cards/{id}/likes", put(add_like).delete(remove_like));
    Router::new()
        .route("/signup", post(register))
        .route("/signin", post(login))
        .route("/users/me", get(verify_token))
        .nest("/v1/demo", resources)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn header_token(headers: &HeaderMap) -> Result<&str, ApiFailure> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiFailure::Unauthorized)
}

/// Resolve the `authorization` header to a user id. Resource routes take
/// the raw token or the `Bearer` form.
async fn authenticate(db: &Db, headers: &HeaderMap) -> Result<Uuid, ApiFailure> {
    let raw = header_token(headers)?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);
    db.read()
        .await
        .tokens
        .get(token)
        .copied()
        .ok_or(ApiFailure::Unauthorized)
}

// --- auth surface ---

async fn register(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<(StatusCode, Json<Account>), ApiFailure> {
    let mut store = db.write().await;
    if store.users.iter().any(|u| u.email == input.email) {
        return Err(ApiFailure::EmailTaken);
    }
    let record = UserRecord::new(input.email, input.password);
    let account = record.account();
    tracing::info!(email = %account.email, "registered user");
    store.users.push(record);
    Ok((StatusCode::CREATED, Json(account)))
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<Json<AuthSession>, ApiFailure> {
    let mut store = db.write().await;
    let user = store
        .users
        .iter()
        .find(|u| u.email == input.email && u.password == input.password)
        .ok_or(ApiFailure::BadCredentials)?;
    let id = user.id;
    let email = user.email.clone();
    let token = Uuid::new_v4().to_string();
    store.tokens.insert(token.clone(), id);
    tracing::info!(email = %email, "issued session token");
    Ok(Json(AuthSession { token, email }))
}

async fn verify_token(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Account>, ApiFailure> {
    // The verification endpoint insists on the Bearer scheme.
    let token = header_token(&headers)?
        .strip_prefix("Bearer ")
        .ok_or(ApiFailure::Unauthorized)?;
    let store = db.read().await;
    let id = store.tokens.get(token).ok_or(ApiFailure::Unauthorized)?;
    let user = store
        .users
        .iter()
        .find(|u| u.id == *id)
        .ok_or(ApiFailure::Unauthorized)?;
    Ok(Json(user.account()))
}

// --- resource surface ---

async fn get_profile(State(db): State<Db>, headers: HeaderMap) -> Result<Json<User>, ApiFailure> {
    let user = authenticate(&db, &headers).await?;
    let store = db.read().await;
    let record = store
        .users
        .iter()
        .find(|u| u.id == user)
        .ok_or(ApiFailure::Unauthorized)?;
    Ok(Json(record.profile()))
}

async fn update_profile(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<UpdateProfile>,
) -> Result<Json<User>, ApiFailure> {
    let user = authenticate(&db, &headers).await?;
    let mut store = db.write().await;
    let record = store
        .users
        .iter_mut()
        .find(|u| u.id == user)
        .ok_or(ApiFailure::Unauthorized)?;
    record.name = input.name;
    record.about = input.about;
    Ok(Json(record.profile()))
}

async fn update_avatar(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<UpdateAvatar>,
) -> Result<Json<User>, ApiFailure> {
    let user = authenticate(&db, &headers).await?;
    let mut store = db.write().await;
    let record = store
        .users
        .iter_mut()
        .find(|u| u.id == user)
        .ok_or(ApiFailure::Unauthorized)?;
    record.avatar = input.avatar;
    Ok(Json(record.profile()))
}

async fn list_cards(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Vec<Card>>, ApiFailure> {
    authenticate(&db, &headers).await?;
    let store = db.read().await;
    Ok(Json(store.cards.clone()))
}

async fn create_card(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateCard>,
) -> Result<(StatusCode, Json<Card>), ApiFailure> {
    let user = authenticate(&db, &headers).await?;
    let card = Card {
        id: Uuid::new_v4(),
        name: input.name,
        link: input.link,
        owner: user,
        likes: Vec::new(),
    };
    db.write().await.cards.push(card.clone());
    Ok((StatusCode::CREATED, Json(card)))
}

async fn delete_card(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiFailure> {
    let user = authenticate(&db, &headers).await?;
    let mut store = db.write().await;
    let index = store
        .cards
        .iter()
        .position(|c| c.id == id)
        .ok_or(ApiFailure::CardNotFound)?;
    if store.cards[index].owner != user {
        return Err(ApiFailure::NotOwner);
    }
    store.cards.remove(index);
    Ok(StatusCode::NO_CONTENT)
}

async fn add_like(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Card>, ApiFailure> {
    let user = authenticate(&db, &headers).await?;
    let mut store = db.write().await;
    let card = store
        .cards
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(ApiFailure::CardNotFound)?;
    // Set semantics: a second PUT changes nothing.
    if !card.likes.contains(&user) {
        card.likes.push(user);
    }
    Ok(Json(card.clone()))
}

async fn remove_like(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Card>, ApiFailure> {
    let user = authenticate(&db, &headers).await?;
    let mut store = db.write().await;
    let card = store
        .cards
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(ApiFailure::CardNotFound)?;
    card.likes.retain(|l| *l != user);
    Ok(Json(card.clone()))
}
