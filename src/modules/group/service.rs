use log::{info, warn};
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        friend::repository::FriendRepo,
        group::{
            model::{CREATE_GROUP_FIELDS, CreateGroupModel, GroupResponse, InsertGroup},
            repository::GroupRepository,
            schema::GroupEntity,
        },
    },
    utils::{group_name, validate_in_order},
};

#[derive(Clone)]
pub struct GroupService<G, F>
where
    G: GroupRepository,
    F: FriendRepo,
{
    group_repo: Arc<G>,
    friend_repo: Arc<F>,
}

impl<G, F> GroupService<G, F>
where
    G: GroupRepository,
    F: FriendRepo,
{
    pub fn with_dependencies(group_repo: Arc<G>, friend_repo: Arc<F>) -> Self {
        GroupService { group_repo, friend_repo }
    }

    /// Creates a group of `admin` and those invitees who are confirmed friends
    /// of `admin`; anyone else on the invite list is dropped.
    pub async fn create_group(
        &self,
        admin: &str,
        group: CreateGroupModel,
    ) -> Result<GroupResponse, error::SystemError> {
        validate_in_order(&group, &CREATE_GROUP_FIELDS)?;

        let friends = self.friend_repo.find_friends_among(admin, &group.invitees).await?;
        if friends.is_empty() {
            return Err(error::SystemError::validation("You have no friends!"));
        }

        let dropped = group.invitees.iter().filter(|i| !friends.contains(*i)).count();
        if dropped > 0 {
            info!("{dropped} invitee(s) of {admin} are not friends and were left out");
        }

        let new_group = InsertGroup {
            name: group_name(admin, &friends),
            admin: admin.to_string(),
            latitude: group.latitude,
            longitude: group.longitude,
        };

        let members: Vec<String> = std::iter::once(admin.to_string()).chain(friends).collect();
        let group_id = self.group_repo.create_with_members(&new_group, &members).await?;

        let created = self.group_repo.find_by_id(group_id).await?.ok_or_else(|| {
            error::SystemError::consistency("Unknown error occurred when creating group")
        })?;
        let members = self.group_repo.find_members(group_id).await?;

        info!("Group {} ({}) created by {}", created.id, created.name, admin);
        Ok(GroupResponse::new(created, members))
    }

    /// Only the admin may delete a group. Deleting an id that does not exist
    /// succeeds without doing anything.
    pub async fn delete_group(
        &self,
        username: &str,
        group_id: i64,
    ) -> Result<(), error::SystemError> {
        match self.group_repo.find_by_id(group_id).await? {
            Some(group) if group.admin != username => {
                return Err(error::SystemError::forbidden("User is not group admin!"));
            }
            Some(_) => {}
            None => warn!("Group {group_id} does not exist, nothing to delete"),
        }

        self.group_repo.delete(group_id).await?;

        let (group, members) = tokio::try_join!(
            self.group_repo.find_by_id(group_id),
            self.group_repo.find_members(group_id),
        )?;
        if group.is_some() || !members.is_empty() {
            return Err(error::SystemError::consistency("Group Not Deleted"));
        }

        info!("Group {group_id} deleted by {username}");
        Ok(())
    }

    pub async fn get_group(&self, group_id: i64) -> Result<GroupResponse, error::SystemError> {
        let group = self
            .group_repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Group not found"))?;
        let members = self.group_repo.find_members(group_id).await?;
        Ok(GroupResponse::new(group, members))
    }

    pub async fn get_groups(&self, username: &str) -> Result<Vec<GroupEntity>, error::SystemError> {
        self.group_repo.find_groups_by_member(username).await
    }
}
