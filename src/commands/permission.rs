//! Permission management command
//!
//! `permission grant|revoke|list` over per-thread, per-user command access.
//! Targets are taken from explicit mentions, or expanded from `@all` to every
//! thread participant; command lists are comma-separated or the literal `all`.

use anyhow::Result;
use async_trait::async_trait;

use crate::platform::{Mention, OutgoingMessage};

use super::command::{Command, CommandEvent};
use super::context::BotContext;

/// Which bulk mutation to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Grant,
    Revoke,
}

/// Grants and revokes per-thread command access
pub struct PermissionCommand;

#[async_trait]
impl Command for PermissionCommand {
    fn name(&self) -> &str {
        "permission"
    }

    fn description(&self) -> &str {
        "Grant or revoke command access for users in this thread"
    }

    fn usage(&self) -> &str {
        "permission <grant|revoke|list> <all | command1,...> <@all | @person1,...>"
    }

    fn pattern(&self) -> &str {
        r"permission\s+(grant|revoke|list)(?:\s+(\S+))?"
    }

    fn admin_only(&self) -> bool {
        true
    }

    async fn execute(&self, event: &CommandEvent, ctx: &BotContext) -> Result<()> {
        match event.arg(0) {
            "grant" => self.apply(event, ctx, Action::Grant).await,
            "revoke" => self.apply(event, ctx, Action::Revoke).await,
            // "list" and anything else the pattern lets through
            _ => {
                ctx.reply(&event.thread_id, "This feature is under development.")
                    .await?;
                Ok(())
            }
        }
    }
}

impl PermissionCommand {
    /// Resolve, validate, and apply one grant/revoke request
    async fn apply(&self, event: &CommandEvent, ctx: &BotContext, action: Action) -> Result<()> {
        let requested = self.resolve_commands(event.arg(1), ctx);

        let user_ids = match self.resolve_users(event, ctx).await? {
            Some(user_ids) => user_ids,
            None => {
                ctx.reply(
                    &event.thread_id,
                    format!("No target users. Usage: {}", self.usage()),
                )
                .await?;
                return Ok(());
            }
        };

        let infos = ctx.commands.command_infos();
        let known: Vec<_> = infos.iter().filter(|i| requested.contains(&i.name)).collect();
        if known.is_empty() {
            ctx.reply(
                &event.thread_id,
                format!("No such command. Usage: {}", self.usage()),
            )
            .await?;
            return Ok(());
        }

        // Admin-only commands are dropped from the applied set, not reported
        let applied: Vec<String> = known
            .iter()
            .filter(|i| !i.admin_only)
            .map(|i| i.name.clone())
            .collect();

        for user_id in &user_ids {
            match action {
                Action::Grant => {
                    ctx.store.grant(&event.thread_id, user_id, &applied).await?;
                }
                Action::Revoke => {
                    ctx.store.revoke(&event.thread_id, user_id, &applied).await?;
                }
            }
        }

        self.send_confirmation(event, ctx, action, &applied, &user_ids)
            .await
    }

    /// Expand the command token: `all` means every registered command,
    /// otherwise a comma-separated list with per-entry trim
    fn resolve_commands(&self, token: &str, ctx: &BotContext) -> Vec<String> {
        if token == "all" {
            ctx.commands
                .command_names()
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            token
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        }
    }

    /// Resolve target users: explicit mentions first, then `@all` expansion
    /// to every thread participant; `None` when neither is present
    async fn resolve_users(
        &self,
        event: &CommandEvent,
        ctx: &BotContext,
    ) -> Result<Option<Vec<String>>> {
        if !event.mentions.is_empty() {
            return Ok(Some(
                event.mentions.iter().map(|m| m.user_id.clone()).collect(),
            ));
        }

        if event.body.contains("@all") {
            let info = ctx.platform.thread_info(&event.thread_id).await?;
            return Ok(Some(info.participant_ids));
        }

        Ok(None)
    }

    /// Send the confirmation message listing affected users and commands
    async fn send_confirmation(
        &self,
        event: &CommandEvent,
        ctx: &BotContext,
        action: Action,
        applied: &[String],
        user_ids: &[String],
    ) -> Result<()> {
        let infos = ctx.platform.user_info(user_ids).await?;
        let mentions: Vec<Mention> = user_ids
            .iter()
            .map(|id| {
                let name = infos.get(id).map(|u| u.name.as_str()).unwrap_or(id.as_str());
                Mention::new(format!("@{}", name), id.clone())
            })
            .collect();

        let verb = match action {
            Action::Grant => "Granted",
            Action::Revoke => "Revoked",
        };
        let tags: Vec<&str> = mentions.iter().map(|m| m.tag.as_str()).collect();
        let body = format!("{} {} for {}.", verb, applied.join(", "), tags.join(", "));

        ctx.platform
            .send_message(
                &event.thread_id,
                OutgoingMessage::text(body).with_mentions(mentions),
            )
            .await?;
        Ok(())
    }
}
