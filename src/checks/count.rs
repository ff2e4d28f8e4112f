use crate::inventory::Inventory;
use crate::report::{CheckResult, Status};

/// Reports the number of running containers. Zero containers is not a problem.
pub fn running_containers(inventory: &Inventory) -> CheckResult {
    let count = inventory.count();
    CheckResult::new(
        Status::Ok,
        "Docker_Containers",
        format!("Running_Instances={count}"),
        format!("{count} Docker container(s) are running"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_is_zero_and_ok() {
        let inventory = Inventory::new("CONTAINER ID   IMAGE   COMMAND   CREATED   STATUS\n");
        let result = running_containers(&inventory);
        assert_eq!(
            result.to_string(),
            "0 Docker_Containers Running_Instances=0 0 Docker container(s) are running"
        );
    }

    #[test]
    fn test_counts_entries() {
        let result = running_containers(&Inventory::new("web1\ncache\n\ndb\n"));
        assert_eq!(result.status(), Status::Ok);
        assert_eq!(result.perfdata(), "Running_Instances=3");
    }
}
