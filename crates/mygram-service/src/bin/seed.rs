use dotenv::dotenv;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let db_url = env::var("DATABASE_URL")?;
    let db = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    seed::seed_data(&db).await?;
    info!("Seed data inserted successfully");

    Ok(())
}

mod seed {
    use chrono::{Duration, Utc};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use sqlx::PgPool;
    use tracing::info;
    use uuid::Uuid;

    pub async fn seed_data(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
        let user_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await?;
        if user_count > 0 {
            info!("Data already exists, skipping seed");
            return Ok(());
        }

        let user_ids = seed_users(db, 10).await?;
        let post_ids = seed_posts(db, &user_ids, 40).await?;
        seed_follows(db, &user_ids, 25).await?;
        seed_likes(db, &user_ids, &post_ids, 80).await?;
        seed_comments(db, &user_ids, &post_ids, 60).await?;

        Ok(())
    }

    async fn seed_users(
        db: &PgPool,
        count: usize,
    ) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
        let mut user_ids = Vec::new();

        for _ in 0..count {
            let id = Uuid::new_v4();
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let bio: Option<String> = if (0..2).fake::<u8>() == 0 {
                Some(Sentence(3..10).fake())
            } else {
                None
            };
            let joined_days_ago: i64 = (30..720).fake();

            sqlx::query(
                "INSERT INTO users (id, name, email, image, bio, created_at)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(id)
            .bind(name)
            .bind(format!("{}-{}", id.simple(), email))
            .bind(format!("https://i.pravatar.cc/150?u={}", id))
            .bind(bio)
            .bind(Utc::now() - Duration::days(joined_days_ago))
            .execute(db)
            .await?;

            user_ids.push(id);
        }

        info!("Seeded {} users", user_ids.len());
        Ok(user_ids)
    }

    async fn seed_posts(
        db: &PgPool,
        user_ids: &[Uuid],
        count: usize,
    ) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
        let mut post_ids = Vec::new();

        for _ in 0..count {
            let id = Uuid::new_v4();
            let author = user_ids[(0..user_ids.len()).fake::<usize>()];
            let caption: Option<String> = if (0..4).fake::<u8>() > 0 {
                Some(Sentence(2..8).fake())
            } else {
                None
            };
            let minutes_ago: i64 = (0..60 * 24 * 30).fake();

            sqlx::query(
                "INSERT INTO posts (id, user_id, image_url, caption, created_at)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id)
            .bind(author)
            .bind(format!("https://picsum.photos/seed/{}/600/600", id.simple()))
            .bind(caption)
            .bind(Utc::now() - Duration::minutes(minutes_ago))
            .execute(db)
            .await?;

            post_ids.push(id);
        }

        info!("Seeded {} posts", post_ids.len());
        Ok(post_ids)
    }

    async fn seed_follows(
        db: &PgPool,
        user_ids: &[Uuid],
        count: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut inserted = 0;

        for _ in 0..count {
            let follower_id = user_ids[(0..user_ids.len()).fake::<usize>()];
            let followee_id = user_ids[(0..user_ids.len()).fake::<usize>()];
            if follower_id == followee_id {
                continue;
            }

            let result = sqlx::query(
                "INSERT INTO follows (follower_id, followee_id, created_at) VALUES ($1, $2, $3)
                 ON CONFLICT (follower_id, followee_id) DO NOTHING",
            )
            .bind(follower_id)
            .bind(followee_id)
            .bind(Utc::now())
            .execute(db)
            .await?;
            inserted += result.rows_affected();
        }

        info!("Seeded {} follows", inserted);
        Ok(())
    }

    async fn seed_likes(
        db: &PgPool,
        user_ids: &[Uuid],
        post_ids: &[Uuid],
        count: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut inserted = 0;

        for _ in 0..count {
            let user_id = user_ids[(0..user_ids.len()).fake::<usize>()];
            let post_id = post_ids[(0..post_ids.len()).fake::<usize>()];

            let result = sqlx::query(
                "INSERT INTO likes (user_id, post_id, created_at) VALUES ($1, $2, $3)
                 ON CONFLICT (user_id, post_id) DO NOTHING",
            )
            .bind(user_id)
            .bind(post_id)
            .bind(Utc::now())
            .execute(db)
            .await?;
            inserted += result.rows_affected();
        }

        info!("Seeded {} likes", inserted);
        Ok(())
    }

    async fn seed_comments(
        db: &PgPool,
        user_ids: &[Uuid],
        post_ids: &[Uuid],
        count: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for _ in 0..count {
            let user_id = user_ids[(0..user_ids.len()).fake::<usize>()];
            let post_id = post_ids[(0..post_ids.len()).fake::<usize>()];
            let content: String = Sentence(1..12).fake();

            sqlx::query(
                "INSERT INTO comments (id, post_id, user_id, content, created_at)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(post_id)
            .bind(user_id)
            .bind(content)
            .bind(Utc::now())
            .execute(db)
            .await?;
        }

        info!("Seeded {} comments", count);
        Ok(())
    }
}
