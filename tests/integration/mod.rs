mod reports_tests;
