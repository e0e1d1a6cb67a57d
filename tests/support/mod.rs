pub mod mock_form;
