use crate::{
    api::{error, success},
    modules::{
        friend::repository_sqlite::FriendRepositorySqlite,
        group::{
            model::{CreateGroupModel, GroupResponse},
            repository_sqlite::GroupRepositorySqlite,
            schema::GroupEntity,
            service::GroupService,
        },
    },
};

pub type GroupSvc = GroupService<GroupRepositorySqlite, FriendRepositorySqlite>;

pub async fn create_group(
    group_service: &GroupSvc,
    admin: &str,
    body: CreateGroupModel,
) -> Result<success::Success<GroupResponse>, error::Error> {
    let group = group_service.create_group(admin, body).await?;
    Ok(success::Success::created(Some(group)).message("Group Created"))
}

pub async fn get_group(
    group_service: &GroupSvc,
    group_id: i64,
) -> Result<success::Success<GroupResponse>, error::Error> {
    let group = group_service.get_group(group_id).await?;
    Ok(success::Success::ok(Some(group)).message("Group retrieved successfully"))
}

pub async fn list_groups(
    group_service: &GroupSvc,
    username: &str,
) -> Result<success::Success<Vec<GroupEntity>>, error::Error> {
    let groups = group_service.get_groups(username).await?;
    Ok(success::Success::ok(Some(groups)).message("Groups retrieved successfully"))
}

pub async fn delete_group(
    group_service: &GroupSvc,
    username: &str,
    group_id: i64,
) -> Result<success::Success<()>, error::Error> {
    group_service.delete_group(username, group_id).await?;
    Ok(success::Success::no_content().message("Group Deleted"))
}
