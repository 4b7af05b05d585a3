//! Fundamental l = 2, n = 0 quasi-normal mode of a Kerr black hole

/// Final spin, ringdown frequency and damping frequency (both
/// in units of the inverse remnant mass), for spins -1 to 0.99
/// in steps of 0.01. Rows with a <= 0 hold the counter-rotating mode.
pub static QNM_TABLE: [[f64; 3]; 200] = [
    [-1.000000000000e+00, 4.675972228040e-02, 1.399991685042e-02],
    [-9.900000000000e-01, 4.678403462735e-02, 1.400316018484e-02],
    [-9.800000000000e-01, 4.682189532237e-02, 1.400734810893e-02],
    [-9.700000000000e-01, 4.686740235217e-02, 1.401185299993e-02],
    [-9.600000000000e-01, 4.691871504058e-02, 1.401651865551e-02],
    [-9.500000000000e-01, 4.697482784857e-02, 1.402126923121e-02],
    [-9.400000000000e-01, 4.703508844047e-02, 1.402605993702e-02],
    [-9.300000000000e-01, 4.709903230425e-02, 1.403086138086e-02],
    [-9.200000000000e-01, 4.716630843076e-02, 1.403565294293e-02],
    [-9.100000000000e-01, 4.723664036161e-02, 1.404041947523e-02],
    [-9.000000000000e-01, 4.730980358462e-02, 1.404514947019e-02],
    [-8.900000000000e-01, 4.738561142037e-02, 1.404983396248e-02],
    [-8.800000000000e-01, 4.746390570884e-02, 1.405446583067e-02],
    [-8.700000000000e-01, 4.754455039052e-02, 1.405903933212e-02],
    [-8.600000000000e-01, 4.762742692441e-02, 1.406354978140e-02],
    [-8.500000000000e-01, 4.771243092132e-02, 1.406799332102e-02],
    [-8.400000000000e-01, 4.779946960898e-02, 1.407236675360e-02],
    [-8.300000000000e-01, 4.788845988376e-02, 1.407666741626e-02],
    [-8.200000000000e-01, 4.797932678600e-02, 1.408089308478e-02],
    [-8.100000000000e-01, 4.807200228827e-02, 1.408504189929e-02],
    [-8.000000000000e-01, 4.816642431896e-02, 1.408911230564e-02],
    [-7.900000000000e-01, 4.826253596590e-02, 1.409310300868e-02],
    [-7.800000000000e-01, 4.836028481971e-02, 1.409701293454e-02],
    [-7.700000000000e-01, 4.845962242710e-02, 1.410084119977e-02],
    [-7.600000000000e-01, 4.856050383162e-02, 1.410458708592e-02],
    [-7.500000000000e-01, 4.866288718488e-02, 1.410825001841e-02],
    [-7.400000000000e-01, 4.876673341485e-02, 1.411182954882e-02],
    [-7.300000000000e-01, 4.887200594115e-02, 1.411532533985e-02],
    [-7.200000000000e-01, 4.897867042904e-02, 1.411873715264e-02],
    [-7.100000000000e-01, 4.908669457573e-02, 1.412206483576e-02],
    [-7.000000000000e-01, 4.919604792363e-02, 1.412530831589e-02],
    [-6.900000000000e-01, 4.930670169665e-02, 1.412846758957e-02],
    [-6.800000000000e-01, 4.941862865566e-02, 1.413154271615e-02],
    [-6.700000000000e-01, 4.953180297072e-02, 1.413453381157e-02],
    [-6.600000000000e-01, 4.964620010734e-02, 1.413744104282e-02],
    [-6.500000000000e-01, 4.976179672517e-02, 1.414026462319e-02],
    [-6.400000000000e-01, 4.987857058719e-02, 1.414300480790e-02],
    [-6.300000000000e-01, 4.999650047816e-02, 1.414566189032e-02],
    [-6.200000000000e-01, 5.011556613124e-02, 1.414823619854e-02],
    [-6.100000000000e-01, 5.023574816156e-02, 1.415072809229e-02],
    [-6.000000000000e-01, 5.035702800613e-02, 1.415313796020e-02],
    [-5.900000000000e-01, 5.047938786920e-02, 1.415546621725e-02],
    [-5.800000000000e-01, 5.060281067252e-02, 1.415771330261e-02],
    [-5.700000000000e-01, 5.072728000994e-02, 1.415987967748e-02],
    [-5.600000000000e-01, 5.085278010588e-02, 1.416196582329e-02],
    [-5.500000000000e-01, 5.097929577726e-02, 1.416397223994e-02],
    [-5.400000000000e-01, 5.110681239847e-02, 1.416589944429e-02],
    [-5.300000000000e-01, 5.123531586923e-02, 1.416774796867e-02],
    [-5.200000000000e-01, 5.136479258488e-02, 1.416951835960e-02],
    [-5.100000000000e-01, 5.149522940894e-02, 1.417121117656e-02],
    [-5.000000000000e-01, 5.162661364776e-02, 1.417282699085e-02],
    [-4.900000000000e-01, 5.175893302698e-02, 1.417436638456e-02],
    [-4.800000000000e-01, 5.189217566972e-02, 1.417582994963e-02],
    [-4.700000000000e-01, 5.202633007625e-02, 1.417721828690e-02],
    [-4.600000000000e-01, 5.216138510515e-02, 1.417853200533e-02],
    [-4.500000000000e-01, 5.229732995563e-02, 1.417977172121e-02],
    [-4.400000000000e-01, 5.243415415113e-02, 1.418093805740e-02],
    [-4.300000000000e-01, 5.257184752397e-02, 1.418203164272e-02],
    [-4.200000000000e-01, 5.271040020092e-02, 1.418305311126e-02],
    [-4.100000000000e-01, 5.284980258973e-02, 1.418400310182e-02],
    [-4.000000000000e-01, 5.299004536654e-02, 1.418488225733e-02],
    [-3.900000000000e-01, 5.313111946396e-02, 1.418569122438e-02],
    [-3.800000000000e-01, 5.327301605993e-02, 1.418643065266e-02],
    [-3.700000000000e-01, 5.341572656722e-02, 1.418710119455e-02],
    [-3.600000000000e-01, 5.355924262354e-02, 1.418770350470e-02],
    [-3.500000000000e-01, 5.370355608223e-02, 1.418823823956e-02],
    [-3.400000000000e-01, 5.384865900341e-02, 1.418870605706e-02],
    [-3.300000000000e-01, 5.399454364572e-02, 1.418910761621e-02],
    [-3.200000000000e-01, 5.414120245846e-02, 1.418944357679e-02],
    [-3.100000000000e-01, 5.428862807409e-02, 1.418971459899e-02],
    [-3.000000000000e-01, 5.443681330127e-02, 1.418992134315e-02],
    [-2.900000000000e-01, 5.458575111812e-02, 1.419006446943e-02],
    [-2.800000000000e-01, 5.473543466594e-02, 1.419014463757e-02],
    [-2.700000000000e-01, 5.488585724314e-02, 1.419016250662e-02],
    [-2.600000000000e-01, 5.503701229959e-02, 1.419011873470e-02],
    [-2.500000000000e-01, 5.518889343116e-02, 1.419001397877e-02],
    [-2.400000000000e-01, 5.534149437455e-02, 1.418984889441e-02],
    [-2.300000000000e-01, 5.549480900243e-02, 1.418962413564e-02],
    [-2.200000000000e-01, 5.564883131867e-02, 1.418934035467e-02],
    [-2.100000000000e-01, 5.580355545395e-02, 1.418899820178e-02],
    [-2.000000000000e-01, 5.595897566148e-02, 1.418859832510e-02],
    [-1.900000000000e-01, 5.611508631294e-02, 1.418814137048e-02],
    [-1.800000000000e-01, 5.627188189460e-02, 1.418762798132e-02],
    [-1.700000000000e-01, 5.642935700361e-02, 1.418705879839e-02],
    [-1.600000000000e-01, 5.658750634448e-02, 1.418643445977e-02],
    [-1.500000000000e-01, 5.674632472565e-02, 1.418575560063e-02],
    [-1.400000000000e-01, 5.690580705629e-02, 1.418502285317e-02],
    [-1.300000000000e-01, 5.706594834319e-02, 1.418423684650e-02],
    [-1.200000000000e-01, 5.722674368776e-02, 1.418339820647e-02],
    [-1.100000000000e-01, 5.738818828318e-02, 1.418250755563e-02],
    [-1.000000000000e-01, 5.755027741171e-02, 1.418156551313e-02],
    [-9.000000000000e-02, 5.771300644202e-02, 1.418057269457e-02],
    [-8.000000000000e-02, 5.787637082669e-02, 1.417952971199e-02],
    [-7.000000000000e-02, 5.804036609979e-02, 1.417843717372e-02],
    [-6.000000000000e-02, 5.820498787456e-02, 1.417729568436e-02],
    [-5.000000000000e-02, 5.837023184118e-02, 1.417610584466e-02],
    [-4.000000000000e-02, 5.853609376463e-02, 1.417486825151e-02],
    [-3.000000000000e-02, 5.870256948260e-02, 1.417358349780e-02],
    [-2.000000000000e-02, 5.886965490351e-02, 1.417225217245e-02],
    [-1.000000000000e-02, 5.903734600462e-02, 1.417087486028e-02],
    [0.000000000000e+00, 5.920563883019e-02, 1.416945214201e-02],
    [1.000000000000e-02, 5.885567842110e-02, 1.384296966191e-02],
    [2.000000000000e-02, 5.909670209062e-02, 1.385247048909e-02],
    [3.000000000000e-02, 5.933987702479e-02, 1.386168666347e-02],
    [4.000000000000e-02, 5.958524490248e-02, 1.387061065832e-02],
    [5.000000000000e-02, 5.983284865462e-02, 1.387923469973e-02],
    [6.000000000000e-02, 6.008273251552e-02, 1.388755075616e-02],
    [7.000000000000e-02, 6.033494207676e-02, 1.389555052747e-02],
    [8.000000000000e-02, 6.058952434395e-02, 1.390322543337e-02],
    [9.000000000000e-02, 6.084652779652e-02, 1.391056660127e-02],
    [1.000000000000e-01, 6.110600245073e-02, 1.391756485342e-02],
    [1.100000000000e-01, 6.136799992605e-02, 1.392421069341e-02],
    [1.200000000000e-01, 6.163257351527e-02, 1.393049429186e-02],
    [1.300000000000e-01, 6.189977825847e-02, 1.393640547140e-02],
    [1.400000000000e-01, 6.216967102113e-02, 1.394193369068e-02],
    [1.500000000000e-01, 6.244231057674e-02, 1.394706802760e-02],
    [1.600000000000e-01, 6.271775769415e-02, 1.395179716146e-02],
    [1.700000000000e-01, 6.299607522997e-02, 1.395610935413e-02],
    [1.800000000000e-01, 6.327732822646e-02, 1.395999243011e-02],
    [1.900000000000e-01, 6.356158401529e-02, 1.396343375536e-02],
    [2.000000000000e-01, 6.384891232752e-02, 1.396642021486e-02],
    [2.100000000000e-01, 6.413938541035e-02, 1.396893818886e-02],
    [2.200000000000e-01, 6.443307815109e-02, 1.397097352754e-02],
    [2.300000000000e-01, 6.473006820891e-02, 1.397251152422e-02],
    [2.400000000000e-01, 6.503043615502e-02, 1.397353688673e-02],
    [2.500000000000e-01, 6.533426562182e-02, 1.397403370708e-02],
    [2.600000000000e-01, 6.564164346182e-02, 1.397398542902e-02],
    [2.700000000000e-01, 6.595265991713e-02, 1.397337481356e-02],
    [2.800000000000e-01, 6.626740880025e-02, 1.397218390216e-02],
    [2.900000000000e-01, 6.658598768720e-02, 1.397039397739e-02],
    [3.000000000000e-01, 6.690849812401e-02, 1.396798552094e-02],
    [3.100000000000e-01, 6.723504584764e-02, 1.396493816868e-02],
    [3.200000000000e-01, 6.756574102257e-02, 1.396123066257e-02],
    [3.300000000000e-01, 6.790069849453e-02, 1.395684079911e-02],
    [3.400000000000e-01, 6.824003806270e-02, 1.395174537402e-02],
    [3.500000000000e-01, 6.858388477220e-02, 1.394592012296e-02],
    [3.600000000000e-01, 6.893236922864e-02, 1.393933965765e-02],
    [3.700000000000e-01, 6.928562793676e-02, 1.393197739730e-02],
    [3.800000000000e-01, 6.964380366542e-02, 1.392380549467e-02],
    [3.900000000000e-01, 7.000704584155e-02, 1.391479475633e-02],
    [4.000000000000e-01, 7.037551097566e-02, 1.390491455669e-02],
    [4.100000000000e-01, 7.074936312228e-02, 1.389413274493e-02],
    [4.200000000000e-01, 7.112877437864e-02, 1.388241554443e-02],
    [4.300000000000e-01, 7.151392542552e-02, 1.386972744373e-02],
    [4.400000000000e-01, 7.190500611472e-02, 1.385603107824e-02],
    [4.500000000000e-01, 7.230221610809e-02, 1.384128710173e-02],
    [4.600000000000e-01, 7.270576557349e-02, 1.382545404656e-02],
    [4.700000000000e-01, 7.311587594414e-02, 1.380848817136e-02],
    [4.800000000000e-01, 7.353278074833e-02, 1.379034329487e-02],
    [4.900000000000e-01, 7.395672651749e-02, 1.377097061427e-02],
    [5.000000000000e-01, 7.438797378182e-02, 1.375031850645e-02],
    [5.100000000000e-01, 7.482679816365e-02, 1.372833231000e-02],
    [5.200000000000e-01, 7.527349158068e-02, 1.370495408578e-02],
    [5.300000000000e-01, 7.572836357225e-02, 1.368012235353e-02],
    [5.400000000000e-01, 7.619174276454e-02, 1.365377180132e-02],
    [5.500000000000e-01, 7.666397849237e-02, 1.362583296482e-02],
    [5.600000000000e-01, 7.714544259831e-02, 1.359623187206e-02],
    [5.700000000000e-01, 7.763653143299e-02, 1.356488964948e-02],
    [5.800000000000e-01, 7.813766808438e-02, 1.353172208394e-02],
    [5.900000000000e-01, 7.864930486845e-02, 1.349663913453e-02],
    [6.000000000000e-01, 7.917192611887e-02, 1.345954438731e-02],
    [6.100000000000e-01, 7.970605132040e-02, 1.342033444450e-02],
    [6.200000000000e-01, 8.025223863804e-02, 1.337889823855e-02],
    [6.300000000000e-01, 8.081108890409e-02, 1.333511625966e-02],
    [6.400000000000e-01, 8.138325013641e-02, 1.328885968313e-02],
    [6.500000000000e-01, 8.196942267584e-02, 1.323998938055e-02],
    [6.600000000000e-01, 8.257036504782e-02, 1.318835479568e-02],
    [6.700000000000e-01, 8.318690067506e-02, 1.313379266191e-02],
    [6.800000000000e-01, 8.381992559472e-02, 1.307612553374e-02],
    [6.900000000000e-01, 8.447041736706e-02, 1.301516009857e-02],
    [7.000000000000e-01, 8.513944540460e-02, 1.295068522802e-02],
    [7.100000000000e-01, 8.582818300390e-02, 1.288246971859e-02],
    [7.200000000000e-01, 8.653792143045e-02, 1.281025965981e-02],
    [7.300000000000e-01, 8.727008649391e-02, 1.273377535320e-02],
    [7.400000000000e-01, 8.802625816487e-02, 1.265270768594e-02],
    [7.500000000000e-01, 8.880819393195e-02, 1.256671383819e-02],
    [7.600000000000e-01, 8.961785679425e-02, 1.247541217043e-02],
    [7.700000000000e-01, 9.045744904502e-02, 1.237837609332e-02],
    [7.800000000000e-01, 9.132945335502e-02, 1.227512666507e-02],
    [7.900000000000e-01, 9.223668314547e-02, 1.216512358206e-02],
    [8.000000000000e-01, 9.318234490590e-02, 1.204775412121e-02],
    [8.100000000000e-01, 9.417011604678e-02, 1.192231944228e-02],
    [8.200000000000e-01, 9.520424320746e-02, 1.178801744716e-02],
    [8.300000000000e-01, 9.628966786893e-02, 1.164392109041e-02],
    [8.400000000000e-01, 9.743218896825e-02, 1.148895059272e-02],
    [8.500000000000e-01, 9.863867650301e-02, 1.132183735110e-02],
    [8.600000000000e-01, 9.991735673215e-02, 1.114107633719e-02],
    [8.700000000000e-01, 1.012782000512e-01, 1.094486221212e-02],
    [8.800000000000e-01, 1.027334596784e-01, 1.073100187783e-02],
    [8.900000000000e-01, 1.042984380135e-01, 1.049679202986e-02],
    [9.000000000000e-01, 1.059926077733e-01, 1.023884313881e-02],
    [9.100000000000e-01, 1.078413068827e-01, 9.952818490129e-03],
    [9.200000000000e-01, 1.098784030812e-01, 9.633032790876e-03],
    [9.300000000000e-01, 1.121506872155e-01, 9.271806571527e-03],
    [9.400000000000e-01, 1.147255580707e-01, 8.858368611342e-03],
    [9.500000000000e-01, 1.177055220856e-01, 8.376852951478e-03],
    [9.600000000000e-01, 1.212584536645e-01, 7.802282759545e-03],
    [9.700000000000e-01, 1.256903932460e-01, 7.091379027650e-03],
    [9.800000000000e-01, 1.316636700705e-01, 6.156791098839e-03],
    [9.900000000000e-01, 1.411775582261e-01, 4.762491720920e-03],
];
