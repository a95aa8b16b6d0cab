use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A configured SSHFS mountpoint: a directory on a remote host and the local
/// directory it gets mounted onto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct MountRecord {
    pub(crate) id: String,
    pub(crate) hostname: String,
    pub(crate) port: u16,
    pub(crate) auth_type: String,
    pub(crate) auth_key: String,
    pub(crate) remote_dir: String,
    pub(crate) local_dir: String,
    pub(crate) state: MountState,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) enum MountState {
    Unknown,
    Unmounted,
    Mounted,
}

impl MountState {
    /// Canonical store encoding. Display strings are derived only at render
    /// time.
    pub(crate) fn as_raw(self) -> i64 {
        match self {
            MountState::Unknown => 0,
            MountState::Unmounted => 1,
            MountState::Mounted => 2,
        }
    }

    pub(crate) fn from_raw(raw: i64) -> Result<Self> {
        match raw {
            0 => Ok(MountState::Unknown),
            1 => Ok(MountState::Unmounted),
            2 => Ok(MountState::Mounted),
            other => anyhow::bail!("invalid mount state value {other}"),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            MountState::Unknown => "Unknown",
            MountState::Unmounted => "Not Mounted",
            MountState::Mounted => "Active",
        }
    }
}

/// Built-in mountpoint list. There is no configuration file; records live
/// here until a real mount backend exists.
pub(crate) fn seed_mountpoints() -> Vec<MountRecord> {
    vec![
        MountRecord {
            id: "jimmy_mediapool".to_string(),
            hostname: "jimmy".to_string(),
            port: 22,
            auth_type: "rsa".to_string(),
            auth_key: "/path/to/key".to_string(),
            remote_dir: "/mediapool".to_string(),
            local_dir: "/mnt/jimmy_mediapool".to_string(),
            state: MountState::Unknown,
        },
        MountRecord {
            id: "jimmy_sdb1".to_string(),
            hostname: "jimmy".to_string(),
            port: 22,
            auth_type: "rsa".to_string(),
            auth_key: "/path/to/key".to_string(),
            remote_dir: "/mnt/sdb1".to_string(),
            local_dir: "/mnt/jimmy_sdb1".to_string(),
            state: MountState::Unknown,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn state_labels_match_variants() {
        assert_eq!(MountState::Unknown.label(), "Unknown");
        assert_eq!(MountState::Unmounted.label(), "Not Mounted");
        assert_eq!(MountState::Mounted.label(), "Active");
    }

    #[test]
    fn from_raw_round_trips_known_values() {
        for state in [
            MountState::Unknown,
            MountState::Unmounted,
            MountState::Mounted,
        ] {
            assert_eq!(MountState::from_raw(state.as_raw()).unwrap(), state);
        }
    }

    #[test]
    fn from_raw_rejects_unknown_values() {
        assert!(MountState::from_raw(3).is_err());
        assert!(MountState::from_raw(-1).is_err());
    }

    #[test]
    fn seed_mountpoints_have_unique_ids() {
        let seeds = seed_mountpoints();
        let ids: HashSet<&str> = seeds.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(seeds.len(), 2);
        assert_eq!(ids.len(), seeds.len());
    }

    #[test]
    fn mount_record_deserializes_from_json() {
        let json = r#"
        {
          "id": "backup",
          "hostname": "nas",
          "port": 2222,
          "auth_type": "rsa",
          "auth_key": "/home/u/.ssh/id_rsa",
          "remote_dir": "/srv/backup",
          "local_dir": "/mnt/backup",
          "state": "Unmounted"
        }
        "#;
        let record: MountRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.port, 2222);
        assert_eq!(record.state, MountState::Unmounted);
    }
}
