use finboard_db::models::user::CreateUser;
use finboard_db::repositories::UserRepo;
use sqlx::PgPool;

fn input(username: &str, role: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: role.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let user = UserRepo::create(&pool, &input("financeiro", "admin")).await.unwrap();

    let by_name = UserRepo::find_by_username(&pool, "financeiro").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);
    assert_eq!(by_name.role, "admin");

    let by_id = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "financeiro");
    assert!(UserRepo::find_by_username(&pool, "ghost").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_if_absent_keeps_first(pool: PgPool) {
    assert!(UserRepo::create_if_absent(&pool, &input("diretoria", "user")).await.unwrap());
    assert!(!UserRepo::create_if_absent(&pool, &input("diretoria", "admin")).await.unwrap());

    let user = UserRepo::find_by_username(&pool, "diretoria").await.unwrap().unwrap();
    assert_eq!(user.role, "user");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_role_violates_check(pool: PgPool) {
    let err = UserRepo::create(&pool, &input("root", "superuser")).await.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}
