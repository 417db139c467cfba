mod content_processor_test;
