use folio_core_contact_contracts::ContactFormService;
use folio_demo::contact::{ADA, INVALID};
use folio_extern_contracts::deliver::MockDeliveryService;
use folio_models::contact::{ContactFormData, FormState};
use pretty_assertions::assert_eq;

use crate::tests::Sut;

#[tokio::test]
async fn after_success() {
    // Arrange
    let deliver = MockDeliveryService::new().with_deliver(ADA.clone(), Ok(()));
    let sut = Sut::prefilled(deliver, ADA.clone());
    sut.submit().await.unwrap();

    // Act
    let result = sut.start_new_message();

    // Assert
    assert!(result);
    assert_eq!(sut.state(), FormState::idle());
    assert_eq!(sut.data(), ContactFormData::default());
}

#[tokio::test]
async fn not_sent_yet() {
    // Arrange
    let sut = Sut::prefilled(MockDeliveryService::new(), INVALID.clone());
    sut.submit().await.unwrap_err();
    let before = sut.state();

    // Act
    let result = sut.start_new_message();

    // Assert
    assert!(!result);
    assert_eq!(sut.state(), before);
    assert_eq!(sut.data(), *INVALID);
}
