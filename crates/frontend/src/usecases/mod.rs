pub mod u101_contract_draft;
