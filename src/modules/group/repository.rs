use crate::api::error;
use crate::modules::group::model::InsertGroup;
use crate::modules::group::schema::GroupEntity;

#[async_trait::async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_by_id(&self, group_id: i64) -> Result<Option<GroupEntity>, error::SystemError>;

    async fn find_members(&self, group_id: i64) -> Result<Vec<String>, error::SystemError>;

    async fn find_groups_by_member(
        &self,
        username: &str,
    ) -> Result<Vec<GroupEntity>, error::SystemError>;

    /// Inserts the group and one membership row per entry of `members` in one
    /// transaction, returning the generated id.
    async fn create_with_members(
        &self,
        group: &InsertGroup,
        members: &[String],
    ) -> Result<i64, error::SystemError>;

    /// Removes the group and its roster; deleting an unknown id is not an error.
    async fn delete(&self, group_id: i64) -> Result<u64, error::SystemError>;
}
