//! Post repository implementation.
//!
//! A post is stored across `posts` and `post_liked_users`; every read
//! resolves the owner row and the liked-users set before handing back a
//! domain `Post`.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Select, Set,
};

use super::entities::post::{self, Entity as PostEntity};
use super::entities::post_liked_user::{self, Entity as LikedUserEntity};
use super::entities::user::{self, Entity as UserEntity};
use crate::domain::{NewPost, Post, PostOwner};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by primary key regardless of owner
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>>;

    /// Find post by primary key only if owned by `user_id`
    async fn find_by_id_and_user(&self, id: i64, user_id: i64) -> AppResult<Option<Post>>;

    /// All posts, newest first
    async fn find_all_order_by_created_desc(&self) -> AppResult<Vec<Post>>;

    /// Posts owned by `user_id`, newest first
    async fn find_all_by_user_order_by_created_desc(&self, user_id: i64) -> AppResult<Vec<Post>>;

    /// Insert a new post
    async fn create(&self, post: NewPost) -> AppResult<Post>;

    /// Overwrite an existing post, including its liked-users set
    async fn save(&self, post: Post) -> AppResult<Post>;

    /// Delete a post; comments and likes cascade in the database
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed post repository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run a post query and assemble owners and liked users.
    async fn load(&self, query: Select<PostEntity>) -> AppResult<Vec<Post>> {
        let rows = query
            .find_also_related(UserEntity)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|(post, _)| post.id).collect();
        let mut liked = self.liked_users(ids).await?;

        Ok(rows
            .into_iter()
            .map(|(model, owner)| {
                let liked_users = liked.remove(&model.id).unwrap_or_default();
                to_domain(model, owner, liked_users)
            })
            .collect())
    }

    async fn liked_users(&self, post_ids: Vec<i64>) -> AppResult<HashMap<i64, BTreeSet<String>>> {
        let rows = LikedUserEntity::find()
            .filter(post_liked_user::Column::PostId.is_in(post_ids))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(group_liked_users(rows))
    }

    async fn load_one(&self, query: Select<PostEntity>) -> AppResult<Option<Post>> {
        Ok(self.load(query).await?.into_iter().next())
    }
}

/// Collect `post_liked_users` rows into one username set per post.
fn group_liked_users(rows: Vec<post_liked_user::Model>) -> HashMap<i64, BTreeSet<String>> {
    let mut grouped: HashMap<i64, BTreeSet<String>> = HashMap::new();
    for row in rows {
        grouped.entry(row.post_id).or_default().insert(row.username);
    }
    grouped
}

/// One `post_liked_users` row per username in the post's set.
fn liked_user_rows(post: &Post) -> Vec<post_liked_user::ActiveModel> {
    post.liked_users
        .iter()
        .map(|username| post_liked_user::ActiveModel {
            post_id: Set(post.id),
            username: Set(username.clone()),
        })
        .collect()
}

fn to_domain(model: post::Model, owner: Option<user::Model>, liked_users: BTreeSet<String>) -> Post {
    Post {
        id: model.id,
        owner: owner.map(|user| PostOwner {
            id: user.id,
            username: user.username,
        }),
        title: model.title,
        caption: model.caption,
        location: model.location,
        likes: model.likes,
        liked_users,
        created_date: model.created_date,
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        self.load_one(PostEntity::find_by_id(id)).await
    }

    async fn find_by_id_and_user(&self, id: i64, user_id: i64) -> AppResult<Option<Post>> {
        self.load_one(
            PostEntity::find_by_id(id).filter(post::Column::UserId.eq(user_id)),
        )
        .await
    }

    async fn find_all_order_by_created_desc(&self) -> AppResult<Vec<Post>> {
        self.load(PostEntity::find().order_by_desc(post::Column::CreatedDate))
            .await
    }

    async fn find_all_by_user_order_by_created_desc(&self, user_id: i64) -> AppResult<Vec<Post>> {
        self.load(
            PostEntity::find()
                .filter(post::Column::UserId.eq(user_id))
                .order_by_desc(post::Column::CreatedDate),
        )
        .await
    }

    async fn create(&self, post: NewPost) -> AppResult<Post> {
        let active_model = post::ActiveModel {
            id: NotSet,
            user_id: Set(post.user_id),
            title: Set(post.title),
            caption: Set(post.caption),
            location: Set(post.location),
            likes: Set(post.likes),
            created_date: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;

        let owner = match model.user_id {
            Some(user_id) => UserEntity::find_by_id(user_id).one(&self.db).await?,
            None => None,
        };

        Ok(to_domain(model, owner, BTreeSet::new()))
    }

    async fn save(&self, post: Post) -> AppResult<Post> {
        let active_model = post::ActiveModel {
            id: Set(post.id),
            user_id: Set(post.owner_id()),
            title: Set(post.title.clone()),
            caption: Set(post.caption.clone()),
            location: Set(post.location.clone()),
            likes: Set(post.likes),
            created_date: Set(post.created_date),
        };
        active_model.update(&self.db).await.map_err(AppError::from)?;

        LikedUserEntity::delete_many()
            .filter(post_liked_user::Column::PostId.eq(post.id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        let rows = liked_user_rows(&post);
        if !rows.is_empty() {
            LikedUserEntity::insert_many(rows)
                .exec(&self.db)
                .await
                .map_err(AppError::from)?;
        }

        tracing::debug!(post_id = post.id, likes = post.likes, "post saved");
        Ok(post)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
