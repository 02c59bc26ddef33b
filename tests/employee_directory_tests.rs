use assert_fs::prelude::*;

use estimates::domain::employee::Availability;
use estimates::domain::team_member::CompensationType;
use estimates::services::compensation::normalize_monthly_cost;
use estimates::services::employees_yaml::load_employee_directory;
use estimates::services::project_yaml::load_project_from_yaml_file;

#[test]
fn project_members_are_resolved_from_the_employee_directory() {
    let temp = assert_fs::TempDir::new().unwrap();

    let employees = temp.child("employees.yaml");
    employees
        .write_str(
            r#"employees:
  - name: Sarah Johnson
    role: Frontend Developer
    compensation: monthly
    rate: 5500
    tech_stack: [React, TypeScript]
  - name: Michael Chen
    role: Backend Developer
    compensation: hourly
    rate: 90
    availability: busy
"#,
        )
        .unwrap();

    let project_file = temp.child("project.yaml");
    project_file
        .write_str(
            r#"name: Directory
duration_months: 2
team_members:
  - employee: Sarah Johnson
  - employee: Michael Chen
    allocation: 50
"#,
        )
        .unwrap();

    let directory = load_employee_directory(employees.path()).unwrap();
    assert_eq!(directory.unique_roles(), vec!["Backend Developer", "Frontend Developer"]);
    assert_eq!(directory.with_availability(Availability::Busy).len(), 1);

    let project = load_project_from_yaml_file(project_file.path(), Some(&directory)).unwrap();
    assert_eq!(project.team_members[0].compensation_type, CompensationType::Monthly);
    assert_eq!(normalize_monthly_cost(&project.team_members[0]), 5500.0);
    assert_eq!(project.team_members[1].role, "Backend Developer");
    assert_eq!(normalize_monthly_cost(&project.team_members[1]), 7200.0);
}
