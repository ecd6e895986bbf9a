mod complaint_tests;
mod resource_tests;
mod transport_tests;
