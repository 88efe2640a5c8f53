use folio_extern_contracts::deliver::MockDeliveryService;

use crate::ContactFormServiceImpl;

mod start_new_message;

type Sut = ContactFormServiceImpl<MockDeliveryService>;
