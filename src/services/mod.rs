pub mod dashboard_poller;
