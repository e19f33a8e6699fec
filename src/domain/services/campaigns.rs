use anyhow::anyhow;
use anyhow::Result;

use crate::domain::models::Campaign;
use crate::domain::models::Message;
use crate::domain::models::SlashCommand;

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod tests;

/// Collects every campaign carried by the message log, in log order, so slash
/// commands can address them by the number rendered next to each proposal.
#[derive(Default)]
pub struct CampaignLedger {
    campaigns: Vec<Campaign>,
}

impl CampaignLedger {
    pub fn replace_from_messages(&mut self, messages: &[Message]) {
        self.campaigns = messages
            .iter()
            .flat_map(|msg| {
                return msg.campaigns.clone();
            })
            .collect();
    }

    pub fn payload_from_slash_command(&self, command: &SlashCommand) -> Result<String> {
        if self.campaigns.is_empty() {
            return Err(anyhow!("There are no generated campaigns to copy yet."));
        }

        let arg_op = command.first_arg();
        if arg_op.is_none() {
            return self.campaigns.last().unwrap().payload_pretty();
        }

        let index = arg_op.unwrap().parse::<usize>()?;
        if index < 1 || index > self.campaigns.len() {
            return Err(anyhow!(format!(
                "Campaign number {index} is not valid."
            )));
        }

        return self.campaigns[index - 1].payload_pretty();
    }

    pub fn len(&self) -> usize {
        return self.campaigns.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.campaigns.is_empty();
    }
}
