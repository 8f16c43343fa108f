use std::collections::BTreeSet;

use filmorate_core::AppResult;
use filmorate_domain::{User, UserId};

use super::UserService;

impl UserService {
    /// Links two users in both directions and returns the first one.
    ///
    /// Linking already-linked users is a no-op, and so is linking a user to
    /// themselves.
    pub async fn add_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        let _gate = self.mutation_gate.lock().await;
        let (user, friend) = self.find_both(user_id, friend_id).await?;
        if user_id == friend_id {
            return Ok(user);
        }

        let (user, _) = self
            .user_repository
            .update_pair(user.with_friend(friend_id), friend.with_friend(user_id))
            .await?;
        Ok(user)
    }

    /// Unlinks two users in both directions and returns the first one.
    ///
    /// Either direction may already be missing; that is not an error.
    pub async fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        let _gate = self.mutation_gate.lock().await;
        let (user, friend) = self.find_both(user_id, friend_id).await?;
        if user_id == friend_id {
            return Ok(user);
        }

        let (user, _) = self
            .user_repository
            .update_pair(
                user.without_friend(friend_id),
                friend.without_friend(user_id),
            )
            .await?;
        Ok(user)
    }

    /// Returns a snapshot of the user's friend identifiers.
    pub async fn list_friends(&self, user_id: UserId) -> AppResult<BTreeSet<UserId>> {
        Ok(self.find_by_id(user_id).await?.friends().clone())
    }

    /// Returns the friends shared by both users; empty when there are none.
    pub async fn common_friends(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> AppResult<BTreeSet<UserId>> {
        let (user, other) = self.find_both(user_id, other_id).await?;
        Ok(user.common_friends(&other))
    }

    async fn find_both(&self, first_id: UserId, second_id: UserId) -> AppResult<(User, User)> {
        let first = self.find_by_id(first_id).await?;
        let second = self.find_by_id(second_id).await?;
        Ok((first, second))
    }
}
