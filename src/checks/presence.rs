use crate::inventory::Inventory;
use crate::report::{CheckResult, Status};

/// Reports, for every watched name or id, whether a running container matches it.
///
/// Matching is plain substring containment against each inventory entry. An empty
/// watch-list produces no results.
pub fn watched_containers(inventory: &Inventory, watch_list: &[String]) -> Vec<CheckResult> {
    if watch_list.is_empty() {
        log::debug!("no containers to watch");
        return Vec::new();
    }

    watch_list
        .iter()
        .map(|watched| {
            let (status, perfdata, description) = if inventory.contains(watched) {
                (Status::Ok, "Status=1", "Container is UP!")
            } else {
                (Status::Crit, "Status=0", "Container is DOWN!")
            };
            CheckResult::new(status, format!("Container_{watched}"), perfdata, description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watch(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_running_container_is_up() {
        let inventory = Inventory::new("CONTAINER ID   NAMES\nabc   prod-web1\n");
        let results = watched_containers(&inventory, &watch(&["web1"]));
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].to_string(),
            "0 Container_web1 Status=1 Container is UP!"
        );
    }

    #[test]
    fn test_missing_container_is_down() {
        let inventory = Inventory::new("cache\ndb\n");
        let results = watched_containers(&inventory, &watch(&["web1"]));
        assert_eq!(
            results[0].to_string(),
            "2 Container_web1 Status=0 Container is DOWN!"
        );
    }

    #[test]
    fn test_one_result_per_watched_name() {
        let inventory = Inventory::new("web1\n");
        let results = watched_containers(&inventory, &watch(&["web1", "db"]));
        let statuses: Vec<_> = results.iter().map(CheckResult::status).collect();
        assert_eq!(statuses, vec![Status::Ok, Status::Crit]);
    }

    #[test]
    fn test_empty_watch_list_is_silent() {
        let inventory = Inventory::new("web1\n");
        assert!(watched_containers(&inventory, &[]).is_empty());
    }

    #[test]
    fn test_header_does_not_match() {
        let inventory = Inventory::new("CONTAINER ID   IMAGE   NAMES\n");
        let results = watched_containers(&inventory, &watch(&["IMAGE"]));
        assert_eq!(results[0].status(), Status::Crit);
    }
}
