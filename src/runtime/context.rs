//! Per-action execution context

use crate::core::Name;
use crate::runtime::action::Action;
use crate::runtime::auth::AccountDirectory;
use crate::token::TokenError;

/// What an action handler may ask of the runtime while it runs
pub struct ApplyContext<'a> {
    receiver: Name,
    action: &'a Action,
    directory: &'a dyn AccountDirectory,
    notified: Vec<Name>,
    inline: Vec<Action>,
}

impl<'a> ApplyContext<'a> {
    pub fn new(receiver: Name, action: &'a Action, directory: &'a dyn AccountDirectory) -> Self {
        Self {
            receiver,
            action,
            directory,
            notified: Vec::new(),
            inline: Vec::new(),
        }
    }

    /// Contract executing the action
    pub fn receiver(&self) -> Name {
        self.receiver
    }

    pub fn action(&self) -> &'a Action {
        self.action
    }

    pub fn has_auth(&self, identity: Name) -> bool {
        self.action.authorized_by(identity)
    }

    /// Fails with `Unauthorized` unless `identity` authorized this action
    pub fn require_auth(&self, identity: Name) -> Result<(), TokenError> {
        if self.has_auth(identity) {
            Ok(())
        } else {
            Err(TokenError::Unauthorized(identity))
        }
    }

    pub fn is_account(&self, account: Name) -> bool {
        self.directory.exists(account)
    }

    /// Notify `recipient` of this action once it completes
    pub fn require_recipient(&mut self, recipient: Name) {
        if recipient != self.receiver && !self.notified.contains(&recipient) {
            self.notified.push(recipient);
        }
    }

    /// Queue a forwarded call; it runs after this action, in send order
    pub fn send_inline(&mut self, action: Action) {
        self.inline.push(action);
    }

    pub fn notified(&self) -> &[Name] {
        &self.notified
    }

    pub fn inline_actions(&self) -> &[Action] {
        &self.inline
    }

    pub(crate) fn into_parts(self) -> (Vec<Name>, Vec<Action>) {
        (self.notified, self.inline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::action::{ActionData, BurnArgs, PermissionLevel};
    use crate::runtime::auth::AccountSet;

    #[test]
    fn test_auth_and_notifications() {
        let contract = Name::from_static("menteentwk");
        let alice = Name::from_static("alice");
        let action = Action::new(
            contract,
            Name::from_static("burn"),
            vec![PermissionLevel::active(alice)],
            ActionData::Burn(BurnArgs {
                from: alice,
                quantity: "1.000 MNT".parse().unwrap(),
                memo: String::new(),
            }),
        );
        let accounts = AccountSet::new([alice]);
        let mut ctx = ApplyContext::new(contract, &action, &accounts);

        assert!(ctx.require_auth(alice).is_ok());
        assert!(matches!(
            ctx.require_auth(contract),
            Err(TokenError::Unauthorized(_))
        ));
        assert!(ctx.is_account(alice));
        assert!(!ctx.is_account(Name::from_static("bob")));

        ctx.require_recipient(alice);
        ctx.require_recipient(alice);
        ctx.require_recipient(contract);
        assert_eq!(ctx.notified(), &[alice]);
    }
}
