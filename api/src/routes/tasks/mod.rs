pub mod tasks_route;
