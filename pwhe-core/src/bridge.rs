use serde::{Deserialize, Serialize};

use crate::block::{pw_ether_name, InterfaceBlock};

/// Naming and policer values for the generated L2VPN bridge domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    pub group: String,
    pub domain_prefix: String,
    pub storm_control_kbps: u32,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            group: "D_NET".to_string(),
            domain_prefix: "ME_DNET_".to_string(),
            storm_control_kbps: 50_000,
        }
    }
}

/// One PW-Ether interface attached to a reserved bridge domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeMember {
    /// Last three digits of the tag, `502` or `504`.
    pub domain: String,
    pub original_header: String,
    /// `PW-Ether <target>.<suffix>`.
    pub interface: String,
}

/// Blocks whose tag ends in a reserved VLAN, in input order.
pub fn bridge_members(blocks: &[InterfaceBlock], target_id: &str) -> Vec<BridgeMember> {
    blocks
        .iter()
        .filter(|block| block.header_parts().is_some())
        .filter_map(|block| {
            let tag = block.tag()?;
            let domain = tag.bridge_domain_suffix()?;
            Some(BridgeMember {
                domain,
                original_header: block.header().trim().to_string(),
                interface: pw_ether_name(target_id, &tag),
            })
        })
        .collect()
}

/// Render the `l2vpn` bridge-group stanza, or `None` when no block needs one.
pub fn bridge_config(
    blocks: &[InterfaceBlock],
    target_id: &str,
    settings: &BridgeSettings,
) -> Option<String> {
    render_bridge_config(&bridge_members(blocks, target_id), settings)
}

pub fn render_bridge_config(
    members: &[BridgeMember],
    settings: &BridgeSettings,
) -> Option<String> {
    if members.is_empty() {
        return None;
    }

    let kbps = settings.storm_control_kbps;
    let mut out = vec!["l2vpn".to_string(), format!(" bridge group {}", settings.group)];
    for member in members {
        out.push(format!(
            "  bridge-domain {}{}",
            settings.domain_prefix, member.domain
        ));
        out.push(format!("   interface {}", member.interface));
        out.push(format!("    storm-control multicast kbps {kbps}"));
        out.push(format!("    storm-control broadcast kbps {kbps}"));
        out.push("    split-horizon group".to_string());
        out.push("   !".to_string());
        out.push("  !".to_string());
    }
    out.push(" !".to_string());
    out.push("!".to_string());
    Some(out.join("\n"))
}
