use sea_orm::{DatabaseConnection, Order, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{category, prelude::Category};

#[derive(Clone)]
pub struct CategoryDao {
    db: DatabaseConnection,
}

impl DaoBase for CategoryDao {
    type Entity = Category;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl CategoryDao {
    pub async fn create_category(
        &self,
        name: String,
        description: Option<String>,
    ) -> DaoResult<category::Model> {
        let model = category::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Names are not unique; ties fall back to id order.
    pub async fn list_all(&self) -> DaoResult<Vec<category::Model>> {
        self.find_all(Some((category::Column::Name, Order::Asc)), |query| query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::CategoryDao;
    use crate::db::dao::DaoBase;
    use crate::test_helpers::category_model;

    #[tokio::test]
    async fn list_all_reads_every_row_once_even_with_duplicate_names() {
        let rows: Vec<_> = (0..150)
            .map(|_| category_model(Uuid::new_v4(), "Same"))
            .collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows])
            .into_connection();
        let dao = CategoryDao::new(&db);

        let all = dao.list_all().await.expect("list should succeed");
        let ids: HashSet<_> = all.iter().map(|c| c.id).collect();
        assert_eq!(all.len(), 150);
        assert_eq!(ids.len(), 150);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statement = format!("{:?}", log[0]);
        assert!(!statement.contains("LIMIT"));
        assert!(statement.contains("name\\\" ASC, "));
        assert!(statement.contains("id\\\" ASC"));
    }

    #[tokio::test]
    async fn create_category_keeps_description() {
        let id = Uuid::new_v4();
        let mut row = category_model(id, "Work");
        row.description = Some("day job".to_string());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[row]])
            .into_connection();
        let dao = CategoryDao::new(&db);

        let created = dao
            .create_category("Work".to_string(), Some("day job".to_string()))
            .await
            .expect("insert should succeed");
        assert_eq!(created.description.as_deref(), Some("day job"));
    }
}
